use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use autolinker::{
    Config, Error, Linker,
    io::{link_file, rewrite},
};
use clap::Parser;
use rayon::prelude::*;

#[derive(Parser)]
#[command(
    version,
    about = "Turn URLs, email addresses, phone numbers, @handles and #hashtags into links"
)]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    #[command(flatten)]
    opts: LinkOpts,
    /// HTML or text files to link
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "CLI exposes six independent flags"
)]
struct LinkOpts {
    /// Do not link URLs
    #[arg(long = "no-urls")]
    no_urls: bool,
    /// Do not link email addresses
    #[arg(long = "no-email")]
    no_email: bool,
    /// Do not link Twitter handles
    #[arg(long = "no-twitter")]
    no_twitter: bool,
    /// Do not link phone numbers
    #[arg(long = "no-phone")]
    no_phone: bool,
    /// Link hashtags to `twitter` or `facebook`
    #[arg(long = "hashtag", value_name = "SERVICE")]
    hashtag: Option<String>,
    /// Open links in the same window (omit `target="_blank"`)
    #[arg(long = "same-window")]
    same_window: bool,
    /// Keep `http://` and `www.` in the visible text of URL links
    #[arg(long = "keep-prefix")]
    keep_prefix: bool,
    /// Shorten link text to at most N characters
    #[arg(long = "truncate", value_name = "N")]
    truncate: Option<usize>,
    /// CSS class added to every link
    #[arg(long = "class-name", value_name = "NAME", default_value = "")]
    class_name: String,
}

impl LinkOpts {
    fn config(&self) -> Result<Config, Error> {
        let mut builder = Config::builder()
            .urls(!self.no_urls)
            .email(!self.no_email)
            .twitter(!self.no_twitter)
            .phone(!self.no_phone)
            .new_window(!self.same_window)
            .strip_prefix(!self.keep_prefix)
            .class_name(self.class_name.as_str());
        if let Some(service) = &self.hashtag {
            builder = builder.hashtag(service.as_str());
        }
        if let Some(max_len) = self.truncate {
            builder = builder.truncate(max_len);
        }
        builder.build()
    }
}

/// Link one file, returning its output unless it was rewritten in place.
fn process_path(path: &Path, linker: &Linker, in_place: bool) -> anyhow::Result<Option<String>> {
    if in_place {
        rewrite(path, linker).with_context(|| format!("failed to rewrite {}", path.display()))?;
        Ok(None)
    } else {
        let linked =
            link_file(path, linker).with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Some(linked))
    }
}

/// Entry point for the command-line tool that links text.
///
/// Reads standard input when no files are given. Files are linked in
/// parallel; their output is printed in argument order. A file that cannot be
/// processed is reported on standard error and makes the tool exit with a
/// failure status once every other file has been handled.
///
/// # Examples
///
/// ```sh
/// # Link a file and print the result
/// autolinker page.html
///
/// # Link files in place, pointing hashtags at Twitter
/// autolinker --in-place --hashtag twitter a.html b.html
///
/// # Link standard input
/// echo "see google.com" | autolinker --same-window
/// ```
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let linker = Linker::new(cli.opts.config()?);

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        print!("{}", linker.link(&input));
        return Ok(());
    }

    let results: Vec<_> = cli
        .files
        .par_iter()
        .map(|path| process_path(path, &linker, cli.in_place))
        .collect();

    let mut failures = 0_usize;
    for result in results {
        match result {
            Ok(Some(linked)) => print!("{linked}"),
            Ok(None) => {}
            Err(err) => {
                eprintln!("{err:#}");
                failures += 1;
            }
        }
    }
    if failures > 0 {
        bail!("{failures} of {} files could not be processed", cli.files.len());
    }
    Ok(())
}
