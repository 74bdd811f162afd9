use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "specto")]
#[command(about = "Browse the technical metadata of a media file", long_about = None)]
pub struct Cli {
    /// Media file to open at startup
    #[arg(required = false)]
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_optional() {
        let cli = Cli::try_parse_from(["specto"]).unwrap();
        assert!(cli.path.is_none());

        let cli = Cli::try_parse_from(["specto", "/music/song.flac"]).unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("/music/song.flac")));
    }

    #[test]
    fn extra_positionals_are_rejected() {
        assert!(Cli::try_parse_from(["specto", "a.mkv", "b.mkv"]).is_err());
    }
}
