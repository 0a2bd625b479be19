use anyhow::Result;
use log::warn;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::{
    catalog::{CatalogBuilder, CatalogView},
    runtime::Runtime,
};

use super::config::Config;

/// Interactive package list: re-scans on every Enter, quits on `q` or end of input
#[tracing::instrument(skip(config))]
pub async fn browse<R: Runtime>(config: Config<R>) -> Result<()> {
    let input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();
    browse_with(&config, input, &mut out).await
}

pub async fn browse_with<R, I, W>(config: &Config<R>, input: I, out: &mut W) -> Result<()>
where
    R: Runtime,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let provider = config.library_provider();
    let view = CatalogView::new(
        CatalogBuilder::new(&config.runtime, provider.as_ref()),
        config.policy,
    );
    let mut lines = input.lines();

    loop {
        match view.refresh().await {
            Ok(_) => render_view(&view, out)?,
            Err(e) => {
                // Keep showing whatever the last successful scan found
                warn!("Refresh failed: {}", e);
                writeln!(out, "Refresh failed: {}", e)?;
                render_view(&view, out)?;
            }
        }
        write!(out, "[Enter] refresh  [q] quit > ")?;
        out.flush()?;

        match lines.next_line().await? {
            Some(line) if line.trim().eq_ignore_ascii_case("q") => break,
            Some(_) => continue,
            None => break,
        }
    }

    writeln!(out)?;
    Ok(())
}

fn render_view<R: Runtime, W: Write>(view: &CatalogView<'_, R>, out: &mut W) -> Result<()> {
    let items = view.items();
    writeln!(out, "R packages ({}):", items.len())?;
    let skipped = view.skipped();
    if !skipped.is_empty() {
        writeln!(out, "  ({} unreadable entries skipped)", skipped.len())?;
    }
    for item in items {
        let mut lines = item.detail.lines();
        if let Some(head) = lines.next() {
            writeln!(out, "  {}", head)?;
        }
        for line in lines {
            writeln!(out, "      {}", line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use crate::test_utils::{configure_mock_library, test_library};

    #[tokio::test]
    async fn test_browse_refreshes_until_quit() {
        let mut runtime = MockRuntime::new();
        let lib = test_library();
        configure_mock_library(
            &mut runtime,
            &lib,
            &[("zoo", "Package: zoo\nVersion: 1.8.11\nTitle: Time Series\n")],
        );
        let config = Config::new(runtime, None, vec![lib], false);

        let mut out = Vec::new();
        browse_with(&config, &b"\n\nq\n"[..], &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("R packages (1):").count(), 3);
        assert!(out.contains("  zoo [1.8.11]\n      Time Series\n"));
    }

    #[tokio::test]
    async fn test_browse_stops_at_end_of_input() {
        let mut runtime = MockRuntime::new();
        let lib = test_library();
        configure_mock_library(&mut runtime, &lib, &[]);
        let config = Config::new(runtime, None, vec![lib], false);

        let mut out = Vec::new();
        browse_with(&config, &b""[..], &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("R packages (0):").count(), 1);
    }

    #[tokio::test]
    async fn test_browse_reports_failed_refresh() {
        let mut runtime = MockRuntime::new();
        let lib = test_library();
        configure_mock_library(&mut runtime, &lib, &[]);
        let config = Config::new(runtime, None, vec![lib.join("missing")], false);

        let mut out = Vec::new();
        browse_with(&config, &b"q\n"[..], &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Refresh failed: Failed to read library directory"));
        assert!(out.contains("R packages (0):"));
    }

    #[tokio::test]
    async fn test_browse_keep_going_reports_skipped() {
        let mut runtime = MockRuntime::new();
        let lib = test_library();
        configure_mock_library(&mut runtime, &lib, &[("zoo", "Package: zoo\n")]);
        let config = Config::new(runtime, None, vec![lib.join("missing"), lib], true);

        let mut out = Vec::new();
        browse_with(&config, &b"q\n"[..], &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("R packages (1):\n  (1 unreadable entries skipped)\n  zoo [null]\n"));
    }
}
