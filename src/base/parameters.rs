use serde::{Deserialize, Serialize};

/// Holds parameters of a material (element type)
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamMaterial {
    /// Minimum eddy viscosity (m²/s)
    ///
    /// Used as a floor of the diagonal entries of the eddy-viscosity tensor if `Config::vt_min` is on.
    pub vt_min: f64,
}

/// Holds the implicitness weights of the θ-method, one per physical term
///
/// All weights are usually equal, but they are kept distinct to allow a selective implicitness.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ThetaWeights {
    /// Weight of the time-derivative history term
    pub time: f64,

    /// Weight of the advection term
    pub advection: f64,

    /// Weight of the diffusion, Reynolds-stress, and dispersion terms
    pub diffusion: f64,

    /// Weight of the gravity and hydrostatic-pressure terms
    pub pressure: f64,

    /// Weight of the bottom friction term
    pub friction: f64,

    /// Weight of the continuity fluxes
    pub continuity: f64,
}

/// Holds the time-integration parameters
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct TimeIntegration {
    /// Time-step length (s)
    pub dt: f64,

    /// Implicitness weights
    pub theta: ThetaWeights,
}

impl ThetaWeights {
    /// Returns weights that are all equal to θ
    pub fn uniform(theta: f64) -> Self {
        ThetaWeights {
            time: theta,
            advection: theta,
            diffusion: theta,
            pressure: theta,
            friction: theta,
            continuity: theta,
        }
    }

    /// Returns the weights as an array (time, advection, diffusion, pressure, friction, continuity)
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.time,
            self.advection,
            self.diffusion,
            self.pressure,
            self.friction,
            self.continuity,
        ]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
