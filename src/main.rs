// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![allow(clippy::uninlined_format_args)]

use std::path;

fn main() {
    if let Err(e) = process() {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn timed<F, T>(perf: bool, name: &str, mut f: F) -> T
where
    F: FnMut() -> T,
{
    let now = std::time::Instant::now();
    let result = f();
    if perf {
        let elapsed = now.elapsed().as_micros() as f64 / 1000.0;
        println!("{}: {:.2}ms", name, elapsed);
    }

    result
}

fn process() -> Result<(), String> {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            println!("{}", HELP);
            return Err(e);
        }
    };

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            log::set_max_level(log::LevelFilter::Warn);
        }
    }

    let root = path::Path::new(env!("CARGO_MANIFEST_DIR"));

    if args.og {
        let path = timed(args.perf, "Rendering", || favicongen::og::generate(root))
            .map_err(|e| e.to_string())?;
        println!("Generated {}", file_name(&path));
        return Ok(());
    }

    timed(args.perf, "Rendering", || {
        favicongen::favicon::generate(root, |path| {
            println!("Generated {}", file_name(path));
        })
    })
    .map_err(|e| e.to_string())?;

    println!("All favicons generated");

    Ok(())
}

const HELP: &str = "\
favicongen renders the EduProof brand icon into the favicon PNG set.

USAGE:
  favicongen [OPTIONS]

  favicongen        # writes public/favicon-<size>.png for each size
  favicongen --og   # writes the social media card instead

OPTIONS:
      --help        Prints this help
  -V, --version     Prints version

      --og          Renders public/brand/og/eduproof-og.svg into
                    public/brand/og/eduproof-og.png at its intrinsic
                    size, instead of the favicon set

      --perf        Prints performance stats
      --quiet       Disables warnings
";

#[derive(Debug)]
struct Args {
    og: bool,
    perf: bool,
    quiet: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut input = pico_args::Arguments::from_env();

    if input.contains("--help") {
        print!("{}", HELP);
        std::process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    let args = Args {
        og: input.contains("--og"),
        perf: input.contains("--perf"),
        quiet: input.contains("--quiet"),
    };

    let remaining = input.finish();
    if !remaining.is_empty() {
        return Err(format!("unexpected arguments: {:?}", remaining));
    }

    Ok(args)
}

fn file_name(path: &path::Path) -> std::borrow::Cow<'_, str> {
    path.file_name()
        .unwrap_or_else(|| path.as_os_str())
        .to_string_lossy()
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, args),
                log::Level::Warn => eprintln!("Warning (in {}:{}): {}", target, line, args),
                log::Level::Info => eprintln!("Info (in {}:{}): {}", target, line, args),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, args),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, args),
            }
        }
    }

    fn flush(&self) {}
}
