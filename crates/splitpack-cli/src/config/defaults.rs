use std::path::PathBuf;

use crate::cli::EsTarget;

pub fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub fn default_target() -> EsTarget {
    EsTarget::Es2015
}

pub fn default_bundle() -> bool {
    true
}

pub fn default_sourcemap() -> bool {
    true
}
