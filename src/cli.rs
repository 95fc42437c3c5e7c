use clap::Parser;

/// Which pipeline phases a run executes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phases {
    IngestOnly,
    TransformOnly,
    Both,
}

impl Phases {
    pub fn runs_ingest(&self) -> bool {
        matches!(self, Phases::IngestOnly | Phases::Both)
    }

    pub fn runs_transform(&self) -> bool {
        matches!(self, Phases::TransformOnly | Phases::Both)
    }
}

/// Ingest popular npm packages and publish them as a validated dataset
#[derive(Parser, Debug)]
#[command(name = "npm-registry")]
#[command(version)]
#[command(
    about = "Ingest popular npm packages and publish them as a validated dataset",
    long_about = "Ingest popular npm packages and publish them as a validated dataset.\n\n\
                  With no flags the ingest phase runs and then the transform phase. \
                  Settings come from npm-registry.config.yml in the working directory \
                  (or the file named by NPM_REGISTRY_CONFIG)."
)]
pub struct Args {
    /// Only fetch from the registry and write the raw artifact
    #[arg(long, conflicts_with = "transform_only")]
    pub ingest_only: bool,

    /// Only transform the existing raw artifact and publish the dataset
    #[arg(long)]
    pub transform_only: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn phases(&self) -> Phases {
        match (self.ingest_only, self.transform_only) {
            (true, _) => Phases::IngestOnly,
            (_, true) => Phases::TransformOnly,
            _ => Phases::Both,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("npm-registry").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_flags_runs_both_phases() {
        let phases = parse(&[]).unwrap().phases();
        assert_eq!(phases, Phases::Both);
        assert!(phases.runs_ingest());
        assert!(phases.runs_transform());
    }

    #[test]
    fn test_ingest_only() {
        let phases = parse(&["--ingest-only"]).unwrap().phases();
        assert_eq!(phases, Phases::IngestOnly);
        assert!(!phases.runs_transform());
    }

    #[test]
    fn test_transform_only() {
        let phases = parse(&["--transform-only"]).unwrap().phases();
        assert_eq!(phases, Phases::TransformOnly);
        assert!(!phases.runs_ingest());
    }

    #[test]
    fn test_flags_conflict() {
        let err = parse(&["--ingest-only", "--transform-only"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = parse(&["--format", "json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
