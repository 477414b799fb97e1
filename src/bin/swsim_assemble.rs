use russell_lab::Vector;
use russell_sparse::{CooMatrix, Sym};
use structopt::StructOpt;
use swsim::base::{Config, Equations, Mesh};
use swsim::fem::ElementVec;
use swsim::StrError;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "swsim_assemble",
    about = "Runs one assembly pass of the shallow-water equations over a mesh"
)]
struct Options {
    /// Path to the JSON file with the mesh
    mesh: String,

    /// Path to the JSON file with the configuration
    config: String,

    /// Uses the reduced (steady) form
    #[structopt(long)]
    reduced: bool,

    /// Computes the local systems in parallel
    #[structopt(long)]
    parallel: bool,

    /// Also computes and assembles the Jacobian matrix
    #[structopt(long)]
    jacobian: bool,
}

fn main() -> Result<(), StrError> {
    env_logger::init();

    // parse options
    let options = Options::from_args();

    // load data
    let mut mesh = Mesh::read_json(&options.mesh)?;
    let config = Config::read_json(&options.config)?;
    mesh.validate()?;
    mesh.init_source_areas()?;
    let eqs = Equations::new(&mesh)?;

    // run the assembly pass
    let mut elements = ElementVec::new(&mesh, &config, &eqs)?;
    elements.assembler.reduced = options.reduced;
    if options.parallel {
        elements.calc_all_parallel(true, options.jacobian)?;
    } else {
        elements.calc_all(true, options.jacobian)?;
    }
    let mut ff = Vector::new(eqs.n_equation);
    let prescribed = vec![false; eqs.n_equation];
    elements.assemble_force(&mut ff, &prescribed);
    let nnz = if options.jacobian {
        let mut kk = CooMatrix::new(eqs.n_equation, eqs.n_equation, eqs.nnz_sup, Sym::No)?;
        elements.assemble_jacobian(&mut kk, &prescribed)?;
        let (_, _, nnz, _) = kk.get_info();
        Some(nnz)
    } else {
        None
    };

    // largest force of each family
    let (mut max_u, mut max_v, mut max_s) = (0.0_f64, 0.0_f64, 0.0_f64);
    for p in 0..mesh.nodes.len() {
        max_u = max_u.max(ff[eqs.u[p]].abs());
        max_v = max_v.max(ff[eqs.v[p]].abs());
        if let Some(eq) = eqs.s[p] {
            max_s = max_s.max(ff[eq].abs());
        }
    }

    // message
    let (assembled, skipped) = elements.counts();
    let title = format!("{} assembly pass", if options.reduced { "reduced" } else { "full" });
    let thin_line = format!("{:─^1$}", "", title.len());
    println!("\n{}\n{}\n{}", thin_line, title, thin_line);
    println!("number of equations = {}", eqs.n_equation);
    println!("elements assembled  = {}", assembled);
    println!("elements skipped    = {}", skipped);
    println!("max |force U|       = {:e}", max_u);
    println!("max |force V|       = {:e}", max_v);
    println!("max |force S|       = {:e}", max_s);
    if let Some(nnz) = nnz {
        println!("jacobian entries    = {}", nnz);
    }
    println!("{}\n", thin_line);
    Ok(())
}
