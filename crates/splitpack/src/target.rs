use serde::{Deserialize, Serialize};
use std::fmt;

/// ECMAScript target version
///
/// Determines which JavaScript language features are available in the output.
/// The default, `es2015` (ES6), keeps the emitted bundles loadable by every
/// runtime the library supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EsTarget {
    /// ECMAScript 2015 (ES6)
    #[default]
    Es2015,
    /// ECMAScript 2016
    Es2016,
    /// ECMAScript 2017
    Es2017,
    /// ECMAScript 2018
    Es2018,
    /// ECMAScript 2019
    Es2019,
    /// ECMAScript 2020
    Es2020,
    /// ECMAScript 2021
    Es2021,
    /// ECMAScript 2022
    Es2022,
    /// Latest ECMAScript features
    Esnext,
}

impl EsTarget {
    /// Name passed to esbuild's `--target`.
    pub const fn as_str(self) -> &'static str {
        match self {
            EsTarget::Es2015 => "es2015",
            EsTarget::Es2016 => "es2016",
            EsTarget::Es2017 => "es2017",
            EsTarget::Es2018 => "es2018",
            EsTarget::Es2019 => "es2019",
            EsTarget::Es2020 => "es2020",
            EsTarget::Es2021 => "es2021",
            EsTarget::Es2022 => "es2022",
            EsTarget::Esnext => "esnext",
        }
    }
}

impl fmt::Display for EsTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
