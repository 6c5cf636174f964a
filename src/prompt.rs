//! 対話入力
//!
//! 標準入力から値を読み取る。テストでは任意の BufRead/Write を注入できる。

use crate::error::{AstrumError, Result};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

/// 対話入力
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// 標準入出力を使う Prompter
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 説明文を表示
    pub fn note(&mut self, heading: &str, lines: &[&str]) -> Result<()> {
        let io_err = |e: io::Error| AstrumError::Prompt(e.to_string());
        writeln!(self.output).map_err(io_err)?;
        writeln!(self.output, "{}", heading.yellow()).map_err(io_err)?;
        writeln!(self.output, "{}", "-".repeat(64).yellow()).map_err(io_err)?;
        for line in lines {
            writeln!(self.output, "{}", line.yellow()).map_err(io_err)?;
        }
        writeln!(self.output).map_err(io_err)?;
        Ok(())
    }

    /// 空でない値を入力させる
    ///
    /// 空入力の場合は `default` を返す。`default` もなければ再入力を求める。
    /// `shown_default` は表示用（トークンのマスク表示など）。
    pub fn ask_required(
        &mut self,
        label: &str,
        default: Option<&str>,
        shown_default: Option<&str>,
    ) -> Result<String> {
        let io_err = |e: io::Error| AstrumError::Prompt(e.to_string());
        let default = default.filter(|d| !d.trim().is_empty());

        loop {
            match shown_default.or(default) {
                Some(shown) if default.is_some() => {
                    write!(self.output, "{} ({}): ", label, shown.dimmed()).map_err(io_err)?
                }
                _ => write!(self.output, "{}: ", label).map_err(io_err)?,
            }
            self.output.flush().map_err(io_err)?;

            let mut line = String::new();
            let read = self.input.read_line(&mut line).map_err(io_err)?;
            if read == 0 {
                return Err(AstrumError::Prompt("input closed".to_string()));
            }

            let answer = line.trim();
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
            if let Some(default) = default {
                return Ok(default.to_string());
            }
            writeln!(self.output, "{}", "A value is required.".red()).map_err(io_err)?;
        }
    }
}
