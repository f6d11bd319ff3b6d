use std::fmt;
use std::str::FromStr;

/// Version control system managing a checkout.
///
/// The set is closed: a directory that matches none of these kinds is
/// unmanaged as far as this tool is concerned and gets skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VcsKind {
    /// Git version control system
    Git,
    /// Mercurial (hg) version control system
    Hg,
    /// Fossil version control system
    Fossil,
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VcsKind::Git => write!(f, "git"),
            VcsKind::Hg => write!(f, "hg"),
            VcsKind::Fossil => write!(f, "fossil"),
        }
    }
}

impl FromStr for VcsKind {
    type Err = VcsKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "git" => Ok(VcsKind::Git),
            "hg" | "mercurial" => Ok(VcsKind::Hg),
            "fossil" => Ok(VcsKind::Fossil),
            _ => Err(VcsKindError::UnsupportedVcsKind(s.to_string())),
        }
    }
}

impl VcsKind {
    /// All supported kinds, in marker detection priority order.
    pub const ALL: [VcsKind; 3] = [VcsKind::Git, VcsKind::Hg, VcsKind::Fossil];

    /// Get the marker directory whose presence identifies this VCS.
    pub fn marker_dir(&self) -> &'static str {
        match self {
            VcsKind::Git => ".git",
            VcsKind::Hg => ".hg",
            VcsKind::Fossil => ".fossil-settings",
        }
    }

    /// Get the standard executable name for this VCS.
    pub fn executable_name(&self) -> &'static str {
        match self {
            VcsKind::Git => "git",
            VcsKind::Hg => "hg",
            VcsKind::Fossil => "fossil",
        }
    }
}

/// Errors that can occur when working with VCS kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsKindError {
    /// The specified VCS kind is not supported
    UnsupportedVcsKind(String),
}

impl fmt::Display for VcsKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VcsKindError::UnsupportedVcsKind(kind) => {
                write!(
                    f,
                    "Unsupported VCS kind: '{}'. Supported kinds are: git, hg, fossil",
                    kind
                )
            }
        }
    }
}

impl std::error::Error for VcsKindError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_vcs_kind_from_str() {
        assert_eq!("git".parse::<VcsKind>().unwrap(), VcsKind::Git);
        assert_eq!("hg".parse::<VcsKind>().unwrap(), VcsKind::Hg);
        assert_eq!("mercurial".parse::<VcsKind>().unwrap(), VcsKind::Hg);
        assert_eq!("fossil".parse::<VcsKind>().unwrap(), VcsKind::Fossil);
        assert_eq!("FOSSIL".parse::<VcsKind>().unwrap(), VcsKind::Fossil);

        assert!("svn".parse::<VcsKind>().is_err());
    }

    #[test]
    fn test_vcs_kind_display() {
        assert_eq!(VcsKind::Git.to_string(), "git");
        assert_eq!(VcsKind::Hg.to_string(), "hg");
        assert_eq!(VcsKind::Fossil.to_string(), "fossil");
    }

    #[test]
    fn test_marker_dirs() {
        assert_eq!(VcsKind::Git.marker_dir(), ".git");
        assert_eq!(VcsKind::Hg.marker_dir(), ".hg");
        assert_eq!(VcsKind::Fossil.marker_dir(), ".fossil-settings");
    }

    #[test]
    fn test_detection_priority_order() {
        assert_eq!(VcsKind::ALL[0], VcsKind::Git);
        assert_eq!(VcsKind::ALL[1], VcsKind::Hg);
        assert_eq!(VcsKind::ALL[2], VcsKind::Fossil);
    }

    #[test]
    fn test_executable_names() {
        assert_eq!(VcsKind::Git.executable_name(), "git");
        assert_eq!(VcsKind::Hg.executable_name(), "hg");
        assert_eq!(VcsKind::Fossil.executable_name(), "fossil");
    }
}
