use super::MAX_NODES;
use crate::StrError;
use gemlab::integ::Gauss;
use gemlab::shapes::{GeoKind, Scratchpad};

/// Returns the kind interpolating with the corner nodes only
///
/// Linear kinds map to themselves.
pub fn corner_kind(kind: GeoKind) -> GeoKind {
    kind.lower_order().unwrap_or(kind)
}

/// Returns the number of corner nodes
pub fn corner_count(kind: GeoKind) -> usize {
    corner_kind(kind).nnode()
}

/// Returns the (left, right) corner nodes flanking a mid-side node
///
/// Returns None if `mid` is a corner node or out of range.
pub fn mid_side_corners(kind: GeoKind, mid: usize) -> Option<(usize, usize)> {
    match (kind, mid) {
        (GeoKind::Lin3, 2) => Some((0, 1)),
        (GeoKind::Tri6, 3) => Some((0, 1)),
        (GeoKind::Tri6, 4) => Some((1, 2)),
        (GeoKind::Tri6, 5) => Some((2, 0)),
        (GeoKind::Qua8, 4) => Some((0, 1)),
        (GeoKind::Qua8, 5) => Some((1, 2)),
        (GeoKind::Qua8, 6) => Some((2, 3)),
        (GeoKind::Qua8, 7) => Some((3, 0)),
        _ => None,
    }
}

/// Returns the integration points of a supported kind
///
/// Triangles use the 7-point rule and quadrilaterals the 3×3 rule, both exact for the quadratic
/// mass terms; lines use 3 points.
pub fn gauss_points(kind: GeoKind) -> Result<Gauss, StrError> {
    let ngauss = match kind {
        GeoKind::Lin2 | GeoKind::Lin3 => 3,
        GeoKind::Tri3 | GeoKind::Tri6 => 7,
        GeoKind::Qua4 | GeoKind::Qua8 => 9,
        _ => return Err("geometry kind is not supported"),
    };
    Gauss::new_or_sized(kind, Some(ngauss))
}

/// Evaluates two interpolation families of an element at the same integration point
///
/// The "full" family uses all nodes (quadratic for Lin3, Tri6, Qua8) and the "linear" family uses
/// the corner nodes only. The coordinate Jacobian comes from the full family; the reference
/// derivatives of the linear family are mapped with its inverse.
pub struct MixedPad {
    /// Geometry kind of the full family
    pub kind: GeoKind,

    /// Number of nodes
    pub nnode: usize,

    /// Number of corner nodes
    pub ncorner: usize,

    /// Full family: shape functions N
    pub nn: [f64; MAX_NODES],

    /// Full family: gradients [∂N/∂x, ∂N/∂y]
    ///
    /// For lines, this is the tangential gradient dN/ds projected onto x and y.
    pub gg: [[f64; 2]; MAX_NODES],

    /// Linear family: shape functions M
    pub mm: [f64; MAX_NODES],

    /// Linear family: gradients [∂M/∂x, ∂M/∂y]
    pub mg: [[f64; 2]; MAX_NODES],

    /// Outward unit normal (lines only); the interior lies to the left of the line
    pub normal: [f64; 2],

    /// Scratchpad of the full family (holds the coordinates)
    pad: Scratchpad,

    /// Scratchpad of the linear family (used for the reference functions only)
    pad_lin: Scratchpad,
}

impl MixedPad {
    /// Allocates a new instance
    pub fn new(kind: GeoKind) -> Result<Self, StrError> {
        let ncorner = match kind {
            GeoKind::Lin2 | GeoKind::Lin3 | GeoKind::Tri3 | GeoKind::Tri6 | GeoKind::Qua4 | GeoKind::Qua8 => {
                corner_count(kind)
            }
            _ => return Err("geometry kind is not supported"),
        };
        Ok(MixedPad {
            kind,
            nnode: kind.nnode(),
            ncorner,
            nn: [0.0; MAX_NODES],
            gg: [[0.0; 2]; MAX_NODES],
            mm: [0.0; MAX_NODES],
            mg: [[0.0; 2]; MAX_NODES],
            normal: [0.0; 2],
            pad: Scratchpad::new(2, kind)?,
            pad_lin: Scratchpad::new(2, corner_kind(kind))?,
        })
    }

    /// Sets the node coordinates, shifting them so that the first node becomes the origin
    ///
    /// # Panics
    ///
    /// A panic occurs if `coords.len()` is smaller than the number of nodes
    pub fn set_coords(&mut self, coords: &[[f64; 2]]) {
        let origin = coords[0];
        for m in 0..self.nnode {
            for j in 0..2 {
                self.pad.set_xx(m, j, coords[m][j] - origin[j]);
            }
        }
    }

    /// Evaluates both families at a reference point
    ///
    /// Returns the factor converting reference weights into physical ones: det(J) for 2D kinds
    /// and the tangent length |dx/dξ| for lines.
    pub fn calc_at(&mut self, ksi: &[f64]) -> Result<f64, StrError> {
        let (nnode, ncorner) = (self.nnode, self.ncorner);
        (self.pad.fn_interp)(&mut self.pad.interp, ksi);
        (self.pad_lin.fn_interp)(&mut self.pad_lin.interp, ksi);
        (self.pad_lin.fn_deriv)(&mut self.pad_lin.deriv, ksi);
        for m in 0..nnode {
            self.nn[m] = self.pad.interp[m];
        }
        for m in 0..ncorner {
            self.mm[m] = self.pad_lin.interp[m];
        }
        if self.kind.ndim() == 2 {
            let det = self.pad.calc_gradient(ksi)?;
            for m in 0..nnode {
                self.gg[m] = [self.pad.gradient.get(m, 0), self.pad.gradient.get(m, 1)];
            }
            let inv = &self.pad.inv_jacobian;
            for m in 0..ncorner {
                let (d0, d1) = (self.pad_lin.deriv.get(m, 0), self.pad_lin.deriv.get(m, 1));
                self.mg[m] = [
                    d0 * inv.get(0, 0) + d1 * inv.get(1, 0),
                    d0 * inv.get(0, 1) + d1 * inv.get(1, 1),
                ];
            }
            Ok(det)
        } else {
            self.pad.calc_jacobian(ksi)?;
            let t = [self.pad.jacobian.get(0, 0), self.pad.jacobian.get(1, 0)];
            let len = f64::sqrt(t[0] * t[0] + t[1] * t[1]);
            if len <= 0.0 {
                return Err("edge has zero length");
            }
            let unit = [t[0] / len, t[1] / len];
            self.normal = [unit[1], -unit[0]];
            for m in 0..nnode {
                let dn_ds = self.pad.deriv.get(m, 0) / len;
                self.gg[m] = [dn_ds * unit[0], dn_ds * unit[1]];
            }
            for m in 0..ncorner {
                let dm_ds = self.pad_lin.deriv.get(m, 0) / len;
                self.mg[m] = [dm_ds * unit[0], dm_ds * unit[1]];
            }
            Ok(len)
        }
    }

    /// Integrates the weights over the element (area or length)
    pub fn measure(&mut self, gauss: &Gauss) -> Result<f64, StrError> {
        let mut sum = 0.0;
        for p in 0..gauss.npoint() {
            sum += self.calc_at(gauss.coords(p))? * gauss.weight(p);
        }
        Ok(sum)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{corner_count, gauss_points, mid_side_corners, MixedPad};
    use gemlab::shapes::GeoKind;
    use russell_lab::approx_eq;

    #[test]
    fn corner_helpers_work() {
        assert_eq!(corner_count(GeoKind::Lin3), 2);
        assert_eq!(corner_count(GeoKind::Tri6), 3);
        assert_eq!(corner_count(GeoKind::Qua8), 4);
        assert_eq!(corner_count(GeoKind::Tri3), 3);
        assert_eq!(mid_side_corners(GeoKind::Lin3, 2), Some((0, 1)));
        assert_eq!(mid_side_corners(GeoKind::Tri6, 5), Some((2, 0)));
        assert_eq!(mid_side_corners(GeoKind::Qua8, 7), Some((3, 0)));
        assert_eq!(mid_side_corners(GeoKind::Tri6, 0), None);
        assert_eq!(mid_side_corners(GeoKind::Tri3, 3), None);
    }

    #[test]
    fn new_captures_errors() {
        assert_eq!(MixedPad::new(GeoKind::Tri10).err(), Some("geometry kind is not supported"));
        assert_eq!(gauss_points(GeoKind::Hex8).err(), Some("geometry kind is not supported"));
    }

    #[test]
    fn tri6_area_and_gradients_work() {
        let mut pad = MixedPad::new(GeoKind::Tri6).unwrap();
        let coords = [[10.0, 20.0], [12.0, 20.0], [10.0, 21.0], [11.0, 20.0], [11.0, 20.5], [10.0, 20.5]];
        pad.set_coords(&coords);
        let gauss = gauss_points(GeoKind::Tri6).unwrap();
        let f = |m: usize| 3.0 * coords[m][0] - coords[m][1];
        let mut area = 0.0;
        for p in 0..gauss.npoint() {
            area += pad.calc_at(gauss.coords(p)).unwrap() * gauss.weight(p);
            // both families reproduce the gradient of the linear field f = 3x - y
            let fx: f64 = (0..6).map(|m| pad.gg[m][0] * f(m)).sum();
            let fy: f64 = (0..6).map(|m| pad.gg[m][1] * f(m)).sum();
            approx_eq(fx, 3.0, 1e-13);
            approx_eq(fy, -1.0, 1e-13);
            let gx: f64 = (0..3).map(|m| pad.mg[m][0] * f(m)).sum();
            let gy: f64 = (0..3).map(|m| pad.mg[m][1] * f(m)).sum();
            approx_eq(gx, 3.0, 1e-13);
            approx_eq(gy, -1.0, 1e-13);
            let sum_n: f64 = pad.nn[..6].iter().sum();
            let sum_m: f64 = pad.mm[..3].iter().sum();
            approx_eq(sum_n, 1.0, 1e-14);
            approx_eq(sum_m, 1.0, 1e-14);
        }
        approx_eq(area, 1.0, 1e-14);
    }

    #[test]
    fn qua8_area_works() {
        let mut pad = MixedPad::new(GeoKind::Qua8).unwrap();
        #[rustfmt::skip]
        let coords = [
            [0.0, 0.0], [4.0, 0.0], [4.0, 2.0], [0.0, 2.0],
            [2.0, 0.0], [4.0, 1.0], [2.0, 2.0], [0.0, 1.0],
        ];
        pad.set_coords(&coords);
        let gauss = gauss_points(GeoKind::Qua8).unwrap();
        approx_eq(pad.measure(&gauss).unwrap(), 8.0, 1e-14);
    }

    #[test]
    fn lin3_length_and_normal_work() {
        let mut pad = MixedPad::new(GeoKind::Lin3).unwrap();
        pad.set_coords(&[[1.0, 1.0], [1.0, 4.0], [1.0, 2.5]]);
        let gauss = gauss_points(GeoKind::Lin3).unwrap();
        let mut length = 0.0;
        for p in 0..gauss.npoint() {
            length += pad.calc_at(gauss.coords(p)).unwrap() * gauss.weight(p);
            // going up along x = 1 the interior is on the left; hence the normal points to +x
            approx_eq(pad.normal[0], 1.0, 1e-15);
            approx_eq(pad.normal[1], 0.0, 1e-15);
        }
        approx_eq(length, 3.0, 1e-14);
    }
}
