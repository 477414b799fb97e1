use super::{ParamMaterial, ThetaWeights, TimeIntegration};
use super::{DEFAULT_GRAVITY, DEFAULT_H_MIN, DEFAULT_KINEMATIC_VISCOSITY};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the global parameters of an assembly pass
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    /// Gravity acceleration (m/s²)
    pub gravity: f64,

    /// Kinematic viscosity (m²/s) added to all entries of the eddy-viscosity tensor
    pub kinematic_viscosity: f64,

    /// Minimum positive flow depth (m)
    pub h_min: f64,

    /// Enables the dispersion terms
    pub dispersion: bool,

    /// Enables the minimum eddy-viscosity floor given by the materials
    pub vt_min: bool,

    /// Time-integration parameters
    pub time: TimeIntegration,

    /// Parameters of materials (element types)
    pub materials: HashMap<usize, ParamMaterial>,
}

impl Config {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Config {
            gravity: DEFAULT_GRAVITY,
            kinematic_viscosity: DEFAULT_KINEMATIC_VISCOSITY,
            h_min: DEFAULT_H_MIN,
            dispersion: false,
            vt_min: false,
            time: TimeIntegration {
                dt: 1.0,
                theta: ThetaWeights::uniform(1.0),
            },
            materials: HashMap::new(),
        }
    }

    /// Sets the gravity acceleration
    pub fn set_gravity(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value < 0.0 {
            return Err("gravity must be ≥ 0.0");
        }
        self.gravity = value;
        Ok(self)
    }

    /// Sets the kinematic viscosity
    pub fn set_kinematic_viscosity(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value < 0.0 {
            return Err("kinematic viscosity must be ≥ 0.0");
        }
        self.kinematic_viscosity = value;
        Ok(self)
    }

    /// Sets the minimum flow depth
    pub fn set_h_min(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("h_min must be > 0.0");
        }
        self.h_min = value;
        Ok(self)
    }

    /// Enables or disables the dispersion terms
    pub fn set_dispersion(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.dispersion = flag;
        Ok(self)
    }

    /// Enables or disables the minimum eddy-viscosity floor
    pub fn set_vt_min(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.vt_min = flag;
        Ok(self)
    }

    /// Sets the time-step length
    pub fn set_dt(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("dt must be > 0.0");
        }
        self.time.dt = value;
        Ok(self)
    }

    /// Sets all implicitness weights to the same θ
    pub fn set_theta(&mut self, value: f64) -> Result<&mut Self, StrError> {
        self.set_theta_weights(ThetaWeights::uniform(value))
    }

    /// Sets the implicitness weights individually
    pub fn set_theta_weights(&mut self, weights: ThetaWeights) -> Result<&mut Self, StrError> {
        if weights.as_array().iter().any(|&w| w <= 0.0 || w > 1.0) {
            return Err("θ weights must satisfy 0 < θ ≤ 1");
        }
        self.time.theta = weights;
        Ok(self)
    }

    /// Sets the parameters of a material
    pub fn set_material(&mut self, material: usize, param: ParamMaterial) -> Result<&mut Self, StrError> {
        if param.vt_min < 0.0 {
            return Err("vt_min must be ≥ 0.0");
        }
        self.materials.insert(material, param);
        Ok(self)
    }

    /// Returns the minimum eddy viscosity of a material
    pub fn material_vt_min(&self, material: usize) -> Result<f64, StrError> {
        match self.materials.get(&material) {
            Some(p) => Ok(p.vt_min),
            None => Err("cannot find material parameters"),
        }
    }

    /// Checks the values (e.g., after deserialization)
    pub fn validate(&self) -> Result<(), StrError> {
        let mut copy = Config::new();
        copy.set_gravity(self.gravity)?
            .set_kinematic_viscosity(self.kinematic_viscosity)?
            .set_h_min(self.h_min)?
            .set_dt(self.time.dt)?
            .set_theta_weights(self.time.theta)?;
        for (id, param) in &self.materials {
            copy.set_material(*id, *param)?;
        }
        Ok(())
    }

    /// Reads a JSON file with the configuration and validates it
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        config.validate()?;
        log::info!("configuration read from {}", path.display());
        Ok(config)
    }

    /// Writes a JSON file with the configuration
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n")?;
        write!(f, "==================\n")?;
        write!(f, "gravity = {:?}\n", self.gravity)?;
        write!(f, "kinematic_viscosity = {:?}\n", self.kinematic_viscosity)?;
        write!(f, "h_min = {:?}\n", self.h_min)?;
        write!(f, "dispersion = {:?}\n", self.dispersion)?;
        write!(f, "vt_min = {:?}\n", self.vt_min)?;
        write!(f, "dt = {:?}\n", self.time.dt)?;
        write!(f, "theta = {:?}\n", self.time.theta.as_array())?;

        write!(f, "\nParameters for Materials\n")?;
        write!(f, "========================\n")?;
        let mut keys: Vec<_> = self.materials.keys().copied().collect();
        keys.sort();
        for key in keys {
            write!(f, "{:?} → {:?}\n", key, self.materials[&key])?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
