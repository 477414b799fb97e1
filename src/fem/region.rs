use super::blocks::{add_block, sub_force, Basis};
use super::{FlowPoint, LocalSystem};
use crate::base::{Config, MixedPad};

/// Holds the factors multiplying each group of terms
///
/// The full form uses 1/dt and the θ weights; the reduced form drops the time terms and
/// uses unit factors.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Factors {
    /// 1/dt (zero in the reduced form)
    pub inv_dt: f64,

    /// 1 - θ_time multiplying the time derivatives of the previous step (zero in the reduced form)
    pub history: f64,

    pub advection: f64,
    pub diffusion: f64,
    pub pressure: f64,
    pub friction: f64,
    pub continuity: f64,

    /// Gravity acceleration
    pub g: f64,
}

impl Factors {
    /// Returns the factors of the full (unsteady Newton-Raphson) form
    pub fn full(config: &Config) -> Self {
        let theta = &config.time.theta;
        Factors {
            inv_dt: 1.0 / config.time.dt,
            history: 1.0 - theta.time,
            advection: theta.advection,
            diffusion: theta.diffusion,
            pressure: theta.pressure,
            friction: theta.friction,
            continuity: theta.continuity,
            g: config.gravity,
        }
    }

    /// Returns the factors of the reduced (steady) form
    pub fn reduced(config: &Config) -> Self {
        Factors {
            inv_dt: 0.0,
            history: 0.0,
            advection: 1.0,
            diffusion: 1.0,
            pressure: 1.0,
            friction: 1.0,
            continuity: 1.0,
            g: config.gravity,
        }
    }
}

/// Returns the velocity-dependent dispersion fluxes and their derivatives
///
/// Returns `(dx_x, dy_x, dy_y)` where each entry is `[value, ∂/∂U, ∂/∂V]` and
///
/// ```text
/// dx_x = U² Dxx − 2 U V Dxy + V² Dyy
/// dy_x = U V (Dxx − Dyy) + (U² − V²) Dxy      (also used as the x-flux of the y-momentum)
/// dy_y = V² Dxx + 2 U V Dxy + U² Dyy
/// ```
fn dispersion(p: &FlowPoint) -> ([f64; 3], [f64; 3], [f64; 3]) {
    let (u, v) = (p.u, p.v);
    let (dxx, dxy, dyy) = (p.dxx, p.dxy, p.dyy);
    let dx_x = [
        u * u * dxx - 2.0 * u * v * dxy + v * v * dyy,
        2.0 * u * dxx - 2.0 * v * dxy,
        -2.0 * u * dxy + 2.0 * v * dyy,
    ];
    let dy_x = [
        u * v * (dxx - dyy) + (u * u - v * v) * dxy,
        v * (dxx - dyy) + 2.0 * u * dxy,
        u * (dxx - dyy) - 2.0 * v * dxy,
    ];
    let dy_y = [
        v * v * dxx + 2.0 * u * v * dxy + u * u * dyy,
        2.0 * v * dxy + 2.0 * u * dyy,
        2.0 * v * dxx + 2.0 * u * dxy,
    ];
    (dx_x, dy_x, dy_y)
}

/// Adds the residual of a region element at one integration point
///
/// ```text
/// x-momentum:
///   f  = H (U − Uo)/dt − (1−θt) H (dU/dt)o + θa H (U Ux + V Uy) + θp H g zx + θf cf |U| U
///   fx = θd H (vtxx Ux + vtxy Uy) − θd H uu − θp g H²/2 + θd H dx_x
///   fy = θd H (vtxy Ux + vtyy Uy) − θd H uv + θd H dy_x
///
/// continuity:
///   f  = (S − So)/dt − (1−θt) (dS/dt)o + θc (H (Ux + Vy) + U Hx + V Hy) + SS
/// ```
pub(crate) fn add_region_force(lsys: &mut LocalSystem, pad: &MixedPad, p: &FlowPoint, k: &Factors, w: f64) {
    let (nnode, h, g) = (lsys.nnode, p.h, k.g);
    let (speed, _) = p.speed();
    let (dx_x, dy_x, dy_y) = dispersion(p);
    let pressure = k.pressure * g * h * h / 2.0;

    let fu = [
        k.inv_dt * h * (p.u - p.u_old) - k.history * h * p.du_dt_old
            + k.advection * h * (p.u * p.ux + p.v * p.uy)
            + k.pressure * h * g * p.zx
            + k.friction * p.cf * speed * p.u,
        k.diffusion * h * (p.vtxx * p.ux + p.vtxy * p.uy) - k.diffusion * h * p.uu - pressure
            + k.diffusion * h * dx_x[0],
        k.diffusion * h * (p.vtxy * p.ux + p.vtyy * p.uy) - k.diffusion * h * p.uv + k.diffusion * h * dy_x[0],
    ];
    let fv = [
        k.inv_dt * h * (p.v - p.v_old) - k.history * h * p.dv_dt_old
            + k.advection * h * (p.u * p.vx + p.v * p.vy)
            + k.pressure * h * g * p.zy
            + k.friction * p.cf * speed * p.v,
        k.diffusion * h * (p.vtxx * p.vx + p.vtxy * p.vy) - k.diffusion * h * p.uv + k.diffusion * h * dy_x[0],
        k.diffusion * h * (p.vtxy * p.vx + p.vtyy * p.vy) - k.diffusion * h * p.vv - pressure
            + k.diffusion * h * dy_y[0],
    ];
    let fs = [
        k.inv_dt * (p.s - p.s_old) - k.history * p.ds_dt_old
            + k.continuity * (h * (p.ux + p.vy) + p.u * p.hx + p.v * p.hy)
            + p.ss,
        0.0,
        0.0,
    ];

    let (nq, ml) = (Basis::quadratic(pad), Basis::linear(pad));
    sub_force(&mut lsys.force, 0, nq, w, &fu);
    sub_force(&mut lsys.force, nnode, nq, w, &fv);
    sub_force(&mut lsys.force, 2 * nnode, ml, w, &fs);
}

/// Adds the full Newton-Raphson Jacobian of a region element at one integration point
///
/// All nine blocks are the analytic derivatives of the terms in `add_region_force`.
/// The depth H depends on S through the linear family (∂H/∂S = 1).
pub(crate) fn add_region_jacobian(lsys: &mut LocalSystem, pad: &MixedPad, p: &FlowPoint, k: &Factors, w: f64) {
    let (nnode, h, g) = (lsys.nnode, p.h, k.g);
    let (u, v) = (p.u, p.v);
    let (speed, inv_speed) = p.speed();
    let (dx_x, dy_x, dy_y) = dispersion(p);
    let (ta, td, tp, tf, tc) = (k.advection, k.diffusion, k.pressure, k.friction, k.continuity);
    let cf = p.cf;

    // ∂(|U| U)/∂U, ∂(|U| U)/∂V, ∂(|U| V)/∂V; note ∂(|U| V)/∂U = ∂(|U| U)/∂V
    let fr_uu = tf * cf * (speed + inv_speed * u * u);
    let fr_uv = tf * cf * inv_speed * u * v;
    let fr_vv = tf * cf * (speed + inv_speed * v * v);

    let (iu, iv, is) = (0, nnode, 2 * nnode);
    let (nq, ml) = (Basis::quadratic(pad), Basis::linear(pad));

    // x-momentum
    let uu = [
        [k.inv_dt * h + ta * h * p.ux + fr_uu, ta * h * u, ta * h * v],
        [td * h * dx_x[1], td * h * p.vtxx, td * h * p.vtxy],
        [td * h * dy_x[1], td * h * p.vtxy, td * h * p.vtyy],
    ];
    let uv = [
        [ta * h * p.uy + fr_uv, 0.0, 0.0],
        [td * h * dx_x[2], 0.0, 0.0],
        [td * h * dy_x[2], 0.0, 0.0],
    ];
    let us = [
        [
            k.inv_dt * (u - p.u_old) - k.history * p.du_dt_old + ta * (u * p.ux + v * p.uy) + tp * g * p.zx,
            0.0,
            0.0,
        ],
        [
            td * (p.vtxx * p.ux + p.vtxy * p.uy) - td * p.uu - tp * g * h + td * dx_x[0],
            0.0,
            0.0,
        ],
        [td * (p.vtxy * p.ux + p.vtyy * p.uy) - td * p.uv + td * dy_x[0], 0.0, 0.0],
    ];
    add_block(&mut lsys.jacobian, iu, iu, nq, nq, w, &uu);
    add_block(&mut lsys.jacobian, iu, iv, nq, nq, w, &uv);
    add_block(&mut lsys.jacobian, iu, is, nq, ml, w, &us);

    // y-momentum
    let vu = [
        [ta * h * p.vx + fr_uv, 0.0, 0.0],
        [td * h * dy_x[1], 0.0, 0.0],
        [td * h * dy_y[1], 0.0, 0.0],
    ];
    let vv = [
        [k.inv_dt * h + ta * h * p.vy + fr_vv, ta * h * u, ta * h * v],
        [td * h * dy_x[2], td * h * p.vtxx, td * h * p.vtxy],
        [td * h * dy_y[2], td * h * p.vtxy, td * h * p.vtyy],
    ];
    let vs = [
        [
            k.inv_dt * (v - p.v_old) - k.history * p.dv_dt_old + ta * (u * p.vx + v * p.vy) + tp * g * p.zy,
            0.0,
            0.0,
        ],
        [td * (p.vtxx * p.vx + p.vtxy * p.vy) - td * p.uv + td * dy_x[0], 0.0, 0.0],
        [
            td * (p.vtxy * p.vx + p.vtyy * p.vy) - td * p.vv - tp * g * h + td * dy_y[0],
            0.0,
            0.0,
        ],
    ];
    add_block(&mut lsys.jacobian, iv, iu, nq, nq, w, &vu);
    add_block(&mut lsys.jacobian, iv, iv, nq, nq, w, &vv);
    add_block(&mut lsys.jacobian, iv, is, nq, ml, w, &vs);

    // continuity
    let su = [[tc * p.hx, tc * h, 0.0], [0.0; 3], [0.0; 3]];
    let sv = [[tc * p.hy, 0.0, tc * h], [0.0; 3], [0.0; 3]];
    let ss = [[k.inv_dt + tc * (p.ux + p.vy), tc * u, tc * v], [0.0; 3], [0.0; 3]];
    add_block(&mut lsys.jacobian, is, iu, ml, nq, w, &su);
    add_block(&mut lsys.jacobian, is, iv, ml, nq, w, &sv);
    add_block(&mut lsys.jacobian, is, is, ml, ml, w, &ss);
}

/// Adds the mass-like blocks of the reduced form at one integration point
///
/// U-U and V-V get N_j w N_k; S-S gets M_j w M_k. The other blocks stay empty.
pub(crate) fn add_region_mass(lsys: &mut LocalSystem, pad: &MixedPad, w: f64) {
    let nnode = lsys.nnode;
    let (nq, ml) = (Basis::quadratic(pad), Basis::linear(pad));
    let mass = [[1.0, 0.0, 0.0], [0.0; 3], [0.0; 3]];
    add_block(&mut lsys.jacobian, 0, 0, nq, nq, w, &mass);
    add_block(&mut lsys.jacobian, nnode, nnode, nq, nq, w, &mass);
    add_block(&mut lsys.jacobian, 2 * nnode, 2 * nnode, ml, ml, w, &mass);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{dispersion, Factors};
    use crate::base::{Config, SampleParams};
    use crate::fem::FlowPoint;
    use russell_lab::approx_eq;

    #[test]
    fn factors_work() {
        let config = SampleParams::config_river();
        let full = Factors::full(&config);
        approx_eq(full.inv_dt, 0.1, 1e-15);
        approx_eq(full.history, 0.3, 1e-15);
        assert_eq!(full.advection, 0.7);
        let reduced = Factors::reduced(&Config::new());
        assert_eq!(reduced.inv_dt, 0.0);
        assert_eq!(reduced.history, 0.0);
        assert_eq!(reduced.continuity, 1.0);
        assert_eq!(reduced.g, 9.81);
    }

    #[test]
    fn dispersion_derivatives_work() {
        let mut p = FlowPoint::default();
        (p.u, p.v, p.dxx, p.dxy, p.dyy) = (0.7, -0.4, 2.0, 0.3, 0.5);
        let (dx_x, dy_x, dy_y) = dispersion(&p);
        let h = 1e-6;
        let mut pu = p;
        pu.u += h;
        let mut mu = p;
        mu.u -= h;
        let mut pv = p;
        pv.v += h;
        let mut mv = p;
        mv.v -= h;
        let (a, b, c) = (dispersion(&pu), dispersion(&mu), dispersion(&pv));
        let d = dispersion(&mv);
        approx_eq(dx_x[1], (a.0[0] - b.0[0]) / (2.0 * h), 1e-8);
        approx_eq(dy_x[1], (a.1[0] - b.1[0]) / (2.0 * h), 1e-8);
        approx_eq(dy_y[1], (a.2[0] - b.2[0]) / (2.0 * h), 1e-8);
        approx_eq(dx_x[2], (c.0[0] - d.0[0]) / (2.0 * h), 1e-8);
        approx_eq(dy_x[2], (c.1[0] - d.1[0]) / (2.0 * h), 1e-8);
        approx_eq(dy_y[2], (c.2[0] - d.2[0]) / (2.0 * h), 1e-8);
    }
}
