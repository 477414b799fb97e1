use crate::base::{Config, MixedPad, Node, MAX_NODES};

/// Returns the depth used by the assembler: the natural depth, or h_min if it is not positive
#[inline]
pub(crate) fn effective_depth(natural: f64, h_min: f64) -> f64 {
    if natural <= 0.0 {
        h_min
    } else {
        natural
    }
}

/// Holds the nodal values of one element gathered from the node arena
///
/// Corner arrays (index < ncorner) feed the linear family; the other arrays feed the quadratic one.
pub(crate) struct ElementState {
    pub nnode: usize,
    pub ncorner: usize,

    // corners
    pub h: [f64; MAX_NODES],
    pub z: [f64; MAX_NODES],
    pub s: [f64; MAX_NODES],
    pub s_old: [f64; MAX_NODES],
    pub ds_dt_old: [f64; MAX_NODES],
    pub cf: [f64; MAX_NODES],
    pub ss: [f64; MAX_NODES],

    /// Corners with a prescribed water level (their S column is not an unknown of the edge)
    pub fixed: [bool; MAX_NODES],

    // all nodes
    pub u: [f64; MAX_NODES],
    pub v: [f64; MAX_NODES],
    pub u_old: [f64; MAX_NODES],
    pub v_old: [f64; MAX_NODES],
    pub du_dt_old: [f64; MAX_NODES],
    pub dv_dt_old: [f64; MAX_NODES],
    pub re_uu: [f64; MAX_NODES],
    pub re_uv: [f64; MAX_NODES],
    pub re_vv: [f64; MAX_NODES],
    pub vt_xx: [f64; MAX_NODES],
    pub vt_xy: [f64; MAX_NODES],
    pub vt_yy: [f64; MAX_NODES],
    pub disp_xx: [f64; MAX_NODES],
    pub disp_xy: [f64; MAX_NODES],
    pub disp_yy: [f64; MAX_NODES],
}

impl ElementState {
    /// Gathers the nodal values
    ///
    /// With `use_outlet`, corners carrying a prescribed water level take their depth from it.
    pub fn gather(nodes: &[&Node], ncorner: usize, h_min: f64, use_outlet: bool) -> Self {
        let nnode = nodes.len();
        let mut st = ElementState {
            nnode,
            ncorner,
            h: [0.0; MAX_NODES],
            z: [0.0; MAX_NODES],
            s: [0.0; MAX_NODES],
            s_old: [0.0; MAX_NODES],
            ds_dt_old: [0.0; MAX_NODES],
            cf: [0.0; MAX_NODES],
            ss: [0.0; MAX_NODES],
            fixed: [false; MAX_NODES],
            u: [0.0; MAX_NODES],
            v: [0.0; MAX_NODES],
            u_old: [0.0; MAX_NODES],
            v_old: [0.0; MAX_NODES],
            du_dt_old: [0.0; MAX_NODES],
            dv_dt_old: [0.0; MAX_NODES],
            re_uu: [0.0; MAX_NODES],
            re_uv: [0.0; MAX_NODES],
            re_vv: [0.0; MAX_NODES],
            vt_xx: [0.0; MAX_NODES],
            vt_xy: [0.0; MAX_NODES],
            vt_yy: [0.0; MAX_NODES],
            disp_xx: [0.0; MAX_NODES],
            disp_xy: [0.0; MAX_NODES],
            disp_yy: [0.0; MAX_NODES],
        };
        for (m, node) in nodes.iter().enumerate() {
            if m < ncorner {
                let mut natural = node.depth();
                if use_outlet {
                    if let Some(level) = node.bc.outlet {
                        natural = level - node.z;
                        st.fixed[m] = true;
                    }
                }
                st.h[m] = effective_depth(natural, h_min);
                st.z[m] = node.z;
                st.s[m] = node.now.s;
                st.s_old[m] = node.old.s;
                st.ds_dt_old[m] = node.old.ds_dt;
                st.cf[m] = node.cf;
                if let Some(source) = node.bc.source {
                    if natural > 0.0 && source.area > 0.0 {
                        st.ss[m] = -source.discharge * (ncorner as f64) / source.area;
                    }
                }
            }
            st.u[m] = node.now.u;
            st.v[m] = node.now.v;
            st.u_old[m] = node.old.u;
            st.v_old[m] = node.old.v;
            st.du_dt_old[m] = node.old.du_dt;
            st.dv_dt_old[m] = node.old.dv_dt;
            st.re_uu[m] = node.re_uu;
            st.re_uv[m] = node.re_uv;
            st.re_vv[m] = node.re_vv;
            st.vt_xx[m] = node.exx * node.vt;
            st.vt_xy[m] = node.exy * node.vt;
            st.vt_yy[m] = node.eyy * node.vt;
            st.disp_xx[m] = node.disp_xx;
            st.disp_xy[m] = node.disp_xy;
            st.disp_yy[m] = node.disp_yy;
        }
        st
    }
}

/// Holds the flow variables interpolated at one integration point
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FlowPoint {
    // linear family
    pub h: f64,
    pub hx: f64,
    pub hy: f64,
    pub s: f64,
    pub s_old: f64,
    pub ds_dt_old: f64,
    pub zx: f64,
    pub zy: f64,
    pub cf: f64,
    pub ss: f64,

    // quadratic family
    pub u: f64,
    pub v: f64,
    pub u_old: f64,
    pub v_old: f64,
    pub du_dt_old: f64,
    pub dv_dt_old: f64,
    pub ux: f64,
    pub uy: f64,
    pub vx: f64,
    pub vy: f64,
    pub uu: f64,
    pub uv: f64,
    pub vv: f64,

    // closures
    pub vtxx: f64,
    pub vtxy: f64,
    pub vtyy: f64,
    pub dxx: f64,
    pub dxy: f64,
    pub dyy: f64,
}

impl FlowPoint {
    /// Interpolates the element state with the shape functions held by the scratchpad
    ///
    /// `vt_floor` clamps the diagonal entries of the eddy-viscosity tensor when given.
    pub fn interpolate(st: &ElementState, pad: &MixedPad, config: &Config, vt_floor: Option<f64>) -> Self {
        let mut p = FlowPoint::default();
        for j in 0..st.ncorner {
            let (m, mx, my) = (pad.mm[j], pad.mg[j][0], pad.mg[j][1]);
            p.h += m * st.h[j];
            p.hx += mx * st.h[j];
            p.hy += my * st.h[j];
            p.s += m * st.s[j];
            p.s_old += m * st.s_old[j];
            p.ds_dt_old += m * st.ds_dt_old[j];
            p.zx += mx * st.z[j];
            p.zy += my * st.z[j];
            p.cf += m * st.cf[j];
            p.ss += m * st.ss[j];
        }
        for j in 0..st.nnode {
            let (n, nx, ny) = (pad.nn[j], pad.gg[j][0], pad.gg[j][1]);
            p.u += n * st.u[j];
            p.v += n * st.v[j];
            p.u_old += n * st.u_old[j];
            p.v_old += n * st.v_old[j];
            p.du_dt_old += n * st.du_dt_old[j];
            p.dv_dt_old += n * st.dv_dt_old[j];
            p.ux += nx * st.u[j];
            p.uy += ny * st.u[j];
            p.vx += nx * st.v[j];
            p.vy += ny * st.v[j];
            p.uu += n * st.re_uu[j];
            p.uv += n * st.re_uv[j];
            p.vv += n * st.re_vv[j];
            p.vtxx += n * st.vt_xx[j];
            p.vtxy += n * st.vt_xy[j];
            p.vtyy += n * st.vt_yy[j];
            if config.dispersion {
                p.dxx += n * st.disp_xx[j];
                p.dxy += n * st.disp_xy[j];
                p.dyy += n * st.disp_yy[j];
            }
        }
        if let Some(vt_min) = vt_floor {
            p.vtxx = f64::max(p.vtxx, vt_min);
            p.vtyy = f64::max(p.vtyy, vt_min);
        }
        p.vtxx += config.kinematic_viscosity;
        p.vtxy += config.kinematic_viscosity;
        p.vtyy += config.kinematic_viscosity;
        p
    }

    /// Returns the speed |U| and its guarded reciprocal
    pub fn speed(&self) -> (f64, f64) {
        let speed = f64::sqrt(self.u * self.u + self.v * self.v);
        let inv = if speed > crate::base::SPEED_THRESHOLD {
            1.0 / speed
        } else {
            0.0
        };
        (speed, inv)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
