use structopt::StructOpt;
use wicksim::prelude::*;
use wicksim::util::write_json;
use wicksim::StrError;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "wicksim",
    about = "Runs the validation cases of the moisture-diffusion solvers"
)]
struct Options {
    /// Case to run (a, b, c, d, e, or f)
    case: Case,

    /// Writes the JSON summary to this file
    #[structopt(short, long)]
    out: Option<String>,

    /// Writes the JSON summary to the default output directory
    #[structopt(short, long)]
    json: bool,

    /// Prints the progress of the time loops
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // run
    let mut study = Study::new();
    study.verbose = options.verbose;
    let summary = study.run(options.case)?;

    // message
    let thin_line = format!("{:─^1$}", "", 60);
    println!("{}", thin_line);
    println!("{}", options.case.description());
    println!("{}", thin_line);
    summary.print();

    // output
    let full_path = match options.out {
        Some(path) => Some(path),
        None if options.json => {
            let letter = format!("{:?}", options.case).to_lowercase();
            Some(format!("{}/case_{}.json", DEFAULT_OUT_DIR, letter))
        }
        None => None,
    };
    if let Some(path) = full_path {
        write_json(summary, &path)?;
        println!("\nsummary written to {}", path);
    }
    Ok(())
}
