//! CLI helpers.

pub(crate) mod error;
mod output;
mod stdout_logger;


use core::fmt;
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;

pub use self::error::{error_context, LineCol};
use self::output::{Output, OutputKind};

use crate::input::IStr;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// An option taking a value which a puzzle accepts in addition to the common
/// ones, see [Opts::value].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag {
    name: &'static str,
    short: Option<&'static str>,
}

impl Flag {
    /// Declare the option `--<name> <value>`.
    pub const fn new(name: &'static str) -> Self {
        Self { name, short: None }
    }

    /// Also accept the option as `-<short> <value>`.
    pub const fn short(self, short: &'static str) -> Self {
        Self {
            name: self.name,
            short: Some(short),
        }
    }

    fn matches(&self, arg: &str) -> bool {
        if let Some(name) = arg.strip_prefix("--") {
            return name == self.name;
        }

        matches!((arg.strip_prefix('-'), self.short), (Some(a), Some(b)) if a == b)
    }
}

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Input file to read instead of the default one.
    input: Option<PathBuf>,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON lines.
    json: bool,
    /// Values for the flags declared by the puzzle.
    values: Vec<(&'static str, String)>,
}

impl Opts {
    /// Parse CLI options from the given arguments.
    pub fn parse_from<I>(flags: &[Flag], args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "-i" | "-in" | "--input" | "--input-file" => {
                    let input = it
                        .next()
                        .with_context(|| format!("missing argument to `{arg}`"))?;
                    opts.input = Some(PathBuf::from(input));
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other => {
                    let Some(flag) = flags.iter().find(|flag| flag.matches(other)) else {
                        bail!("unsupported argument: {other}");
                    };

                    let value = it
                        .next()
                        .with_context(|| format!("missing argument to `{other}`"))?;

                    let value = value
                        .into_string()
                        .map_err(|_| anyhow!("missing string argument to `{other}`"))?;

                    opts.values.retain(|(n, _)| *n != flag.name);
                    opts.values.push((flag.name, value));
                }
            }
        }

        Ok(opts)
    }

    /// The input file passed with `--input`, if any.
    #[inline]
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    /// Get the parsed value of a declared flag, if it was passed.
    pub fn value<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let Some((_, value)) = self.values.iter().find(|(n, _)| *n == name) else {
            return Ok(None);
        };

        let value = value
            .parse()
            .with_context(|| format!("bad argument to `--{name}`"))?;

        Ok(Some(value))
    }

    fn install_logger(&self) {
        if self.json {
            return;
        }

        let level = if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };

        log::set_max_level(level);
        // Only fails if a logger is already installed.
        _ = log::set_logger(&STDOUT_LOGGER);
    }
}

/// A labelled answer produced by a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub label: Cow<'static, str>,
    pub value: u64,
}

impl Answer {
    /// Construct a new answer.
    #[inline]
    pub fn new(label: &'static str, value: u64) -> Self {
        Self {
            label: Cow::Borrowed(label),
            value,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Entry point of a puzzle binary, see [run].
pub fn main<S, T, A>(flags: &[Flag], default: &Path, setup: S) -> ExitCode
where
    S: FnOnce(&Opts) -> Result<T>,
    T: FnOnce(IStr) -> Result<A>,
    A: IntoIterator<Item = Answer>,
{
    let stdout = std::io::stdout();
    run(stdout.lock(), std::env::args_os().skip(1), flags, default, setup)
}

/// Run a puzzle with the given arguments, writing its answers to `out`.
///
/// `setup` configures the puzzle from the parsed options and returns the
/// solver, which is then called with the input read from `--input` or else
/// `default`. Any error along the way is written to `out` as a single error
/// message, with the position in the input it refers to if there is one.
pub fn run<O, I, S, T, A>(out: O, args: I, flags: &[Flag], default: &Path, setup: S) -> ExitCode
where
    O: Write,
    I: IntoIterator<Item = OsString>,
    S: FnOnce(&Opts) -> Result<T>,
    T: FnOnce(IStr) -> Result<A>,
    A: IntoIterator<Item = Answer>,
{
    let args = args.into_iter().collect::<Vec<_>>();

    let kind = if wants_json(&args) {
        OutputKind::Json
    } else {
        OutputKind::Normal
    };

    let mut o = Output::new(out, kind);

    match try_run(&mut o, args, flags, default, setup) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // Nowhere left to report a failure to write the error.
            _ = o.error(format_args!("{error:#}"));
            ExitCode::FAILURE
        }
    }
}

fn try_run<O, S, T, A>(
    o: &mut Output<O>,
    args: Vec<OsString>,
    flags: &[Flag],
    default: &Path,
    setup: S,
) -> Result<()>
where
    O: Write,
    S: FnOnce(&Opts) -> Result<T>,
    T: FnOnce(IStr) -> Result<A>,
    A: IntoIterator<Item = Answer>,
{
    let opts = Opts::parse_from(flags, args)?;
    opts.install_logger();

    let solve = setup(&opts)?;

    let path = opts.input_path().unwrap_or(default);
    let input = crate::read_input(path)?;

    let answers = solve(input).map_err(|error| error_context(path, input, error))?;

    for answer in answers {
        o.answer(&answer)?;
    }

    Ok(())
}

/// Test if `--json` was requested, which decides how errors raised while
/// parsing the options themselves are reported.
fn wants_json(args: &[OsString]) -> bool {
    args.iter()
        .map(OsString::as_os_str)
        .take_while(|arg| *arg != OsStr::new("--"))
        .any(|arg| arg == OsStr::new("--json"))
}
