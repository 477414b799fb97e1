use super::{Config, ParamMaterial};

/// Holds samples of configurations
pub struct SampleParams {}

impl SampleParams {
    /// Returns a fully implicit configuration without viscosity (dt = 0.5)
    ///
    /// Useful to isolate the time, pressure, and friction terms.
    pub fn config_inviscid() -> Config {
        let mut config = Config::new();
        config.kinematic_viscosity = 0.0;
        config.time.dt = 0.5;
        config.materials.insert(1, ParamMaterial { vt_min: 0.0 });
        config
    }

    /// Returns a configuration of a river reach with all closures enabled (θ = 0.7, dt = 10 s)
    pub fn config_river() -> Config {
        let mut config = Config::new();
        config.dispersion = true;
        config.vt_min = true;
        config.time.dt = 10.0;
        config.time.theta = super::ThetaWeights::uniform(0.7);
        config.materials.insert(1, ParamMaterial { vt_min: 0.002 });
        config
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
