use clap::{Parser, ValueEnum};

use crate::theme::ThemeMode;

/// Where the skip catalog comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Source {
    /// Bundled NR32 catalog with a simulated network delay.
    Fixture,
    /// Live skip-hire API, see `--api-url`.
    Http,
}

#[derive(Parser, Debug)]
#[command(
    name = "skiphire",
    version,
    about = "Choose a skip size for your skip-hire booking"
)]
pub(crate) struct Args {
    /// Postcode district to price skips for
    #[arg(short, long, default_value = "NR32")]
    pub postcode: String,

    /// Area within the postcode district (e.g. "Lowestoft")
    #[arg(short, long)]
    pub area: Option<String>,

    /// Catalog source
    #[arg(long, value_enum, default_value_t = Source::Fixture)]
    pub source: Source,

    /// Root URL of the skip-hire API, required with `--source http`
    #[arg(long, required_if_eq("source", "http"))]
    pub api_url: Option<String>,

    /// Simulated latency of the fixture source, in milliseconds
    #[arg(long, default_value_t = 800)]
    pub delay_ms: u64,

    /// Initial colour theme
    #[arg(long, value_enum, default_value_t = ThemeMode::Light)]
    pub theme: ThemeMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_fixture_for_nr32() {
        let args = Args::try_parse_from(["skiphire"]).expect("defaults should parse");

        assert_eq!(args.postcode, "NR32");
        assert_eq!(args.area, None);
        assert_eq!(args.source, Source::Fixture);
        assert_eq!(args.delay_ms, 800);
        assert_eq!(args.theme, ThemeMode::Light);
    }

    #[test]
    fn http_source_needs_api_url() {
        assert!(Args::try_parse_from(["skiphire", "--source", "http"]).is_err());

        let args = Args::try_parse_from([
            "skiphire",
            "--source",
            "http",
            "--api-url",
            "https://skips.test/api",
            "--theme",
            "dark",
        ])
        .expect("http with url should parse");
        assert_eq!(args.api_url.as_deref(), Some("https://skips.test/api"));
        assert_eq!(args.theme, ThemeMode::Dark);
    }
}
