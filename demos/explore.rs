use clap::Parser;

use aig_enum::explore::{Explorer, ExploreOptions};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Number of circuit inputs.
    #[arg(value_name = "INT")]
    num_inputs: usize,

    /// Number of circuit outputs.
    #[arg(value_name = "INT")]
    num_outputs: usize,

    /// Stop after this many gates.
    #[clap(long, value_name = "INT")]
    max_gates: Option<usize>,

    /// Print a minimal circuit for every discovered function.
    #[clap(long)]
    witnesses: bool,

    /// Log level.
    #[clap(long, value_name = "LEVEL", default_value = "Info")]
    log_level: simplelog::LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("args = {:?}", args);

    let n = args.num_inputs;
    let m = args.num_outputs;
    let options = ExploreOptions {
        max_gates: args.max_gates,
    };

    let mut explorer = Explorer::new(n, m);
    explorer.run(&options, |p| {
        println!(
            "{:2} {:2} {:2} : {:11} {:15}  ({:8.2}s)",
            n,
            m,
            p.num_gates,
            p.num_funcs,
            p.num_circuits,
            p.elapsed.as_secs_f64()
        );
    });

    if args.witnesses {
        let mut funcs: Vec<_> = explorer.functions().collect();
        funcs.sort_by_key(|(func, circuit)| (circuit.num_gates(), func.bits().clone()));
        for (func, circuit) in funcs {
            println!("----------------------------------");
            println!("{}", func);
            println!("{} gates: {}", circuit.num_gates(), circuit);
        }
    }

    println!("{} functions from {} circuits", explorer.num_funcs(), explorer.num_circuits());
    if explorer.is_complete() {
        println!("All functions discovered with at most {} gates", explorer.next_gates() - 1);
    }

    Ok(())
}
