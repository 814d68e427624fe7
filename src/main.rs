mod amount;
mod cli;
mod owner;
mod report;
mod rpc;
mod signer;
mod tx;
mod types;
mod ui;

use log::debug;
use std::io;

fn main() {
    env_logger::init();

    let args = cli::CliArgs::parse_args();

    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    if let Err(e) = run(&args) {
        ui::print_error(&e);
        std::process::exit(1);
    }
}

/// Build, sign, submit, and report one Move call. Every error on this
/// path is fatal and carries the raw cause; only the report at the end is
/// failure-tolerant.
fn run(args: &cli::CliArgs) -> Result<(), String> {
    let keypair = signer::SuiKeypair::from_env(&args.key_env)?;
    let sender = keypair.sui_address();
    debug!("sender address {}", sender);

    let request = tx::MoveCallRequest::from_target(&args.target, &args.args, args.gas_budget)?;
    let client = rpc::RpcClient::new(&args.endpoint());
    ui::status(&format!(
        "calling {}::{} as {} via {}",
        request.module,
        request.function,
        owner::shorten(&sender),
        client.endpoint()
    ));

    let tx_bytes = client.build_move_call(
        &sender,
        &request.package,
        &request.module,
        &request.function,
        &request.arguments,
        request.gas_budget,
    )?;
    let signature = keypair.sign_transaction(&tx_bytes)?;

    if args.dry_run {
        ui::status("dry run: transaction built and signed, not submitted");
        return Ok(());
    }

    let result = client.execute_transaction(&tx_bytes, &signature)?;
    debug!("transaction digest {}", result.digest);

    let stdout = io::stdout();
    let mut out = report::ReportWriter::new(stdout.lock(), ui::use_colors(args.no_color));
    report::render(&result, &mut out).map_err(|e| format!("Failed to write report: {}", e))
}
