use super::{corner_count, gauss_points, Element, MixedPad, Node, Role, MAX_NODES, NORMAL_TOLERANCE};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the nodes and elements (arena storage)
///
/// Elements refer to nodes by index. The nodes are shared by all elements referencing them.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Mesh {
    /// All nodes
    pub nodes: Vec<Node>,

    /// All elements (regions and boundary edges)
    pub elements: Vec<Element>,
}

impl Mesh {
    /// Returns the node coordinates of an element
    pub fn element_coords(&self, element: &Element) -> Result<[[f64; 2]; MAX_NODES], StrError> {
        if element.points.len() > MAX_NODES {
            return Err("number of points does not match the geometry kind");
        }
        let mut coords = [[0.0; 2]; MAX_NODES];
        for (m, p) in element.points.iter().enumerate() {
            coords[m] = self.nodes.get(*p).ok_or("point index is out of bounds")?.coords();
        }
        Ok(coords)
    }

    /// Computes the area (or length, for boundary edges) of an element
    pub fn element_measure(&self, element: &Element) -> Result<f64, StrError> {
        let mut pad = MixedPad::new(element.kind)?;
        pad.set_coords(&self.element_coords(element)?);
        pad.measure(&gauss_points(element.kind)?)
    }

    /// Validates the topology and the geometry
    ///
    /// The assembler assumes a valid mesh; this function must be called upstream.
    pub fn validate(&self) -> Result<(), StrError> {
        for (i, node) in self.nodes.iter().enumerate() {
            if node.id != i {
                return Err("node id must equal its index");
            }
            if node.bc.rotated() {
                let [nx, ny] = node.bc.normal;
                if f64::abs(f64::sqrt(nx * nx + ny * ny) - 1.0) > NORMAL_TOLERANCE {
                    return Err("slip or inlet node must have a unit normal");
                }
            }
        }
        let npoint = self.nodes.len();
        for (i, element) in self.elements.iter().enumerate() {
            if element.id != i {
                return Err("element id must equal its index");
            }
            let mut pad = MixedPad::new(element.kind)?;
            if element.points.len() != element.kind.nnode() {
                return Err("number of points does not match the geometry kind");
            }
            if element.points.iter().any(|p| *p >= npoint) {
                return Err("point index is out of bounds");
            }
            match element.role {
                Role::Region => {
                    if element.kind.ndim() != 2 {
                        return Err("region element must be two-dimensional");
                    }
                    pad.set_coords(&self.element_coords(element)?);
                    let gauss = gauss_points(element.kind)?;
                    for p in 0..gauss.npoint() {
                        let det = pad
                            .calc_at(gauss.coords(p))
                            .map_err(|_| "region element has a non-positive Jacobian determinant")?;
                        if det <= 0.0 {
                            return Err("region element has a non-positive Jacobian determinant");
                        }
                    }
                }
                Role::Boundary => {
                    if element.kind.ndim() != 1 {
                        return Err("boundary element must be one-dimensional");
                    }
                    pad.set_coords(&self.element_coords(element)?);
                    let length = pad
                        .measure(&gauss_points(element.kind)?)
                        .map_err(|_| "boundary element has zero length")?;
                    if length <= 0.0 {
                        return Err("boundary element has zero length");
                    }
                }
            }
        }
        Ok(())
    }

    /// Sets the area of point sources to the total area of the connected (wet) region elements
    ///
    /// Nodes are addressed by their position in the arena; corner indices out of range are an error.
    pub fn init_source_areas(&mut self) -> Result<(), StrError> {
        let mut areas = vec![0.0; self.nodes.len()];
        for element in &self.elements {
            if element.role != Role::Region || element.dry {
                continue;
            }
            let area = self.element_measure(element)?;
            for p in element.points.iter().take(corner_count(element.kind)) {
                *areas.get_mut(*p).ok_or("point index is out of bounds")? += area;
            }
        }
        for (i, node) in self.nodes.iter_mut().enumerate() {
            if let Some(source) = node.bc.source.as_mut() {
                if areas[i] > 0.0 {
                    source.area = areas[i];
                } else {
                    log::warn!("point source at node {} is not connected to any wet element", node.id);
                }
            }
        }
        Ok(())
    }

    /// Reads a JSON file with the mesh
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
        let mesh: Mesh = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        log::info!(
            "mesh read from {} with {} nodes and {} elements",
            path.display(),
            mesh.nodes.len(),
            mesh.elements.len()
        );
        Ok(mesh)
    }

    /// Writes a JSON file with the mesh
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
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
