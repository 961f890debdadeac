// N クイーン並列総当たり - エントリポイント

use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

use nqueens::logging;
use nqueens::{BoardSize, Coordinator, SearchConfig};

const USAGE: &str = "Usage: nqueens [N] [--solver occupancy|bitmask] [--mode pool|threads] \
[--workers K] [--verbose] [--log PATH] [--json]";

struct Options {
    config: SearchConfig,
    json: bool,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut config = SearchConfig::default();
    let mut json = false;
    let mut size_given = false;

    let mut i = 0;
    while i < args.len() {
        let value = |i: usize| {
            args.get(i + 1)
                .ok_or_else(|| anyhow!("{} には値が必要です", args[i]))
        };
        match args[i].as_str() {
            "--solver" => {
                config.solver = value(i)?.parse()?;
                i += 2;
            }
            "--mode" => {
                config.mode = value(i)?.parse()?;
                i += 2;
            }
            "--workers" => {
                config.num_workers = value(i)?
                    .parse()
                    .context("--workers は整数で指定してください")?;
                i += 2;
            }
            "--log" => {
                // ログ先の指定は詳細ログの有効化を兼ねる
                config.log_path = Some(PathBuf::from(value(i)?));
                config.verbose = true;
                i += 2;
            }
            "--verbose" => {
                config.verbose = true;
                i += 1;
            }
            "--json" => {
                json = true;
                i += 1;
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other if !other.starts_with('-') => {
                if size_given {
                    return Err(anyhow!("盤面サイズが重複しています: {}\n{}", other, USAGE));
                }
                size_given = true;
                let n: usize = other
                    .parse()
                    .with_context(|| format!("盤面サイズが不正です: {}", other))?;
                config.board_size = BoardSize::new(n)?;
                i += 1;
            }
            other => {
                return Err(anyhow!("不明なオプション: {}\n{}", other, USAGE));
            }
        }
    }

    config.validate()?;
    Ok(Options { config, json })
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args)?;

    logging::init_from_config(&options.config)?;

    let summary = Coordinator::new(options.config)?.run()?;
    if options.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!("{}", summary.total);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nqueens::{ExecutionMode, SolverKind, DEFAULT_BOARD_SIZE};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_use_defaults() {
        let opts = parse_args(&[]).unwrap();
        assert_eq!(opts.config.board_size.get(), DEFAULT_BOARD_SIZE);
        assert!(!opts.json);
        assert!(!opts.config.verbose);
    }

    #[test]
    fn parses_all_options() {
        let opts = parse_args(&args(&[
            "10", "--solver", "bitmask", "--mode", "threads", "--workers", "3", "--verbose",
            "--log", "run.log", "--json",
        ]))
        .unwrap();
        assert_eq!(opts.config.board_size.get(), 10);
        assert_eq!(opts.config.solver, SolverKind::Bitmask);
        assert_eq!(opts.config.mode, ExecutionMode::Threads);
        assert_eq!(opts.config.num_workers, 3);
        assert!(opts.config.verbose);
        assert_eq!(opts.config.log_path, Some(PathBuf::from("run.log")));
        assert!(opts.json);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_args(&args(&["0"])).is_err());
        assert!(parse_args(&args(&["abc"])).is_err());
        assert!(parse_args(&args(&["--workers"])).is_err());
        assert!(parse_args(&args(&["--workers", "0"])).is_err());
        assert!(parse_args(&args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn log_path_enables_verbose() {
        let opts = parse_args(&args(&["--log", "run.log"])).unwrap();
        assert!(opts.config.verbose);
        assert_eq!(opts.config.log_path, Some(PathBuf::from("run.log")));
    }

    #[test]
    fn rejects_second_board_size() {
        assert!(parse_args(&args(&["8", "10"])).is_err());
        assert!(parse_args(&args(&["8", "--json", "8"])).is_err());
    }
}
