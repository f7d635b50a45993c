use crate::cli::EsTarget;
use crate::config::SplitpackConfig;
use splitpack::BaseConfig;

// Conversion implementations: CLI/config values -> core values

impl From<EsTarget> for splitpack::EsTarget {
    fn from(t: EsTarget) -> Self {
        match t {
            EsTarget::Es2015 => splitpack::EsTarget::Es2015,
            EsTarget::Es2016 => splitpack::EsTarget::Es2016,
            EsTarget::Es2017 => splitpack::EsTarget::Es2017,
            EsTarget::Es2018 => splitpack::EsTarget::Es2018,
            EsTarget::Es2019 => splitpack::EsTarget::Es2019,
            EsTarget::Es2020 => splitpack::EsTarget::Es2020,
            EsTarget::Es2021 => splitpack::EsTarget::Es2021,
            EsTarget::Es2022 => splitpack::EsTarget::Es2022,
            EsTarget::Esnext => splitpack::EsTarget::Esnext,
        }
    }
}

impl From<&SplitpackConfig> for BaseConfig {
    fn from(config: &SplitpackConfig) -> Self {
        BaseConfig::new()
            .src_dir(&config.src_dir)
            .out_dir(&config.out_dir)
            .bundle(config.bundle)
            .sourcemap(config.sourcemap)
            .target(config.target.into())
            .minify(config.minify)
            .external(config.external.iter().cloned())
    }
}
