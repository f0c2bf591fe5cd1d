use lr35902_registers::assignment::Assignment;
use lr35902_registers::cpu::{Reg, RegisterFile, RegisterName, RegisterSnapshot, WReg};

use clap::Parser;
use log::{debug, info};
use strum::IntoEnumIterator;

/// Write LR35902 registers by name and print the resulting register file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Register write as NAME=VALUE (e.g. hl=0xabcd, sp=-1), applied in order
    #[arg(short = 's', long = "set")]
    assignments: Vec<Assignment>,

    /// Start from the DMG post-bootrom register values instead of zero
    #[arg(long, default_value_t = false)]
    post_boot: bool,

    /// Debug mode
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Returns the lines to print for `args`.
fn run(args: &Args) -> Vec<String> {
    let mut registers = if args.post_boot {
        info!("Starting from post-bootrom state");
        RegisterFile::from_snapshot(RegisterSnapshot::DMG_POST_BOOT)
    } else {
        RegisterFile::new()
    };

    if args.assignments.is_empty() && !args.post_boot && !args.debug {
        registers.set_a(0x10);
        return vec![registers.a().to_string()];
    }

    for assignment in &args.assignments {
        debug!("Applying {}", assignment);
        assignment.apply(&mut registers);
    }

    let mut lines = vec![registers.to_string()];
    if args.debug {
        let names = Reg::iter()
            .map(RegisterName::Byte)
            .chain(WReg::iter().map(RegisterName::Word));
        lines.extend(names.map(|name| registers.describe(name)));
    }
    lines
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    for line in run(&args) {
        println!("{}", line);
    }
}
