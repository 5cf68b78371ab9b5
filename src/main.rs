//! 命令行入口
//!
//! 用法: `zh-converter [OPTIONS] <action> <text>`，结果以 UTF-8 原样写到标准输出，
//! 不追加换行。诊断信息只写到标准错误。
//!
//! 选项只能出现在 `<action>` 之前；`<action>` 之后的参数一律当作文本，
//! 即使它看起来像 `--help` 或 `-c`。

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use zh_converter::{Action, AppConfig, ChineseConverter};

#[derive(Parser, Debug)]
#[command(
    name = "zh-converter",
    version,
    about = "Simplified/Traditional Chinese conversion and translation"
)]
struct Cli {
    /// simplify, traditionalize, translate_en, translate_de, translate_vi,
    /// translate_zh_simp or translate_zh_trad
    #[arg(value_name = "ACTION", value_parser = parse_action)]
    action: Action,

    /// Text to convert, taken verbatim
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    text: String,

    /// Configuration file (defaults to ./zh-converter.toml or ./.zh-converter.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn parse_action(value: &str) -> Result<Action, String> {
    value.parse::<Action>().map_err(|e| e.to_string())
}

/// 在第一个位置参数前插入 `--`
///
/// 只识别 `<action>` 之前的选项；其后的参数全部交给 clap 当作位置参数。
/// 参数里已经有 `--` 时不再插入。
fn escape_positionals(args: Vec<OsString>) -> Vec<OsString> {
    let mut index = 1;
    while index < args.len() {
        let Some(arg) = args[index].to_str() else {
            break;
        };
        match arg {
            "--" => return args,
            "-c" | "--config" => index += 2,
            "-h" | "--help" | "-V" | "--version" => index += 1,
            _ if arg.starts_with("--config=") => index += 1,
            _ if arg.starts_with("-c") && arg.len() > 2 => index += 1,
            _ => break,
        }
    }

    let mut escaped = args;
    let at = index.min(escaped.len());
    escaped.insert(at, OsString::from("--"));
    escaped
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse_from(escape_positionals(std::env::args_os().collect())) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let config = match &cli.config {
        Some(path) => match AppConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => AppConfig::load_from_default_locations(),
    };

    let converter = match ChineseConverter::new(&config.translation) {
        Ok(converter) => converter,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = converter.run(cli.action, &cli.text).await;

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(result.as_bytes()).and_then(|()| stdout.flush()) {
        eprintln!("Failed to write output: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<OsString> {
        std::iter::once("zh-converter")
            .chain(args.iter().copied())
            .map(OsString::from)
            .collect()
    }

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(escape_positionals(argv(args)))
    }

    #[test]
    fn separator_goes_before_the_action() {
        assert_eq!(
            escape_positionals(argv(&["simplify", "--help"])),
            argv(&["--", "simplify", "--help"])
        );
        assert_eq!(
            escape_positionals(argv(&["-c", "a.toml", "simplify", "-c"])),
            argv(&["-c", "a.toml", "--", "simplify", "-c"])
        );
        assert_eq!(
            escape_positionals(argv(&["--config=a.toml", "translate_en", "x"])),
            argv(&["--config=a.toml", "--", "translate_en", "x"])
        );
    }

    #[test]
    fn existing_separator_is_left_alone() {
        let args = argv(&["--", "simplify", "--"]);
        assert_eq!(escape_positionals(args.clone()), args);
    }

    #[test]
    fn flag_like_text_is_taken_verbatim() {
        for text in ["--help", "-V", "--version", "--", "-c", "--config", "-h"] {
            let cli = parse(&["simplify", text]).unwrap();
            assert_eq!(cli.action, Action::Simplify);
            assert_eq!(cli.text, text);
            assert!(cli.config.is_none());
        }
    }

    #[test]
    fn config_before_action_is_still_an_option() {
        let cli = parse(&["--config", "a.toml", "translate_de", "--config"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("a.toml")));
        assert_eq!(cli.action, Action::TranslateDe);
        assert_eq!(cli.text, "--config");
    }

    #[test]
    fn leading_help_still_shows_help() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn wrong_argument_counts_are_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["simplify"]).is_err());
        assert!(parse(&["simplify", "a", "b"]).is_err());
        assert!(parse(&["simplify", "a", "--config", "x.toml"]).is_err());
    }
}
