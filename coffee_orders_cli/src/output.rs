use std::path::Path;

use anyhow::Result;
use coffee_orders_lib::{AuthoredLink, RunSummary};
use serde::Serialize;

#[derive(Serialize)]
struct LinkRow {
    #[serde(rename = "User")]
    author: String,
    #[serde(rename = "Link")]
    url: String,
}

fn build_link_rows(links: &[AuthoredLink]) -> Vec<LinkRow> {
    links
        .iter()
        .map(|l| LinkRow {
            author: l.author.clone(),
            url: l.url.clone(),
        })
        .collect()
}

pub fn print_links_csv(links: &[AuthoredLink]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_link_rows(links) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn format_summary(summary: &RunSummary, path: &Path) -> String {
    format!(
        "Wrote {} rows to {} ({} links, {} unique products)",
        summary.rows,
        path.display(),
        summary.links,
        summary.unique_urls
    )
}

pub fn print_summary(summary: &RunSummary, path: &Path) {
    eprintln!("{}", format_summary(summary, path));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_from_rows<T: Serialize>(rows: &[T]) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in rows {
            wtr.serialize(row).unwrap();
        }
        wtr.flush().unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_link_rows_keep_order() {
        let links = vec![
            AuthoredLink::new("Bob Dvorak", "https://www.kofio.cz/a"),
            AuthoredLink::new("Alice Novak", "https://www.kofio.cz/a"),
        ];
        let rows = build_link_rows(&links);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].author, "Bob Dvorak");
        assert_eq!(rows[1].author, "Alice Novak");
    }

    #[test]
    fn test_csv_link_headers() {
        let rows = build_link_rows(&[AuthoredLink::new("Bob Dvorak", "https://www.kofio.cz/a")]);
        let csv = csv_from_rows(&rows);
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), "User,Link");
        assert_eq!(lines.next().unwrap(), "Bob Dvorak,https://www.kofio.cz/a");
    }

    #[test]
    fn test_format_summary() {
        let summary = RunSummary {
            links: 5,
            unique_urls: 3,
            rows: 5,
        };
        assert_eq!(
            format_summary(&summary, Path::new("orders.csv")),
            "Wrote 5 rows to orders.csv (5 links, 3 unique products)"
        );
    }
}
