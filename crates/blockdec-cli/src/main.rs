use clap::Parser;

use blockdec_core::decode::decode;
use blockdec_core::model::BLOCK_HASHES;
use blockdec_core::render::block_report;

#[derive(Debug, Parser)]
#[command(
    name = "blockdec",
    version,
    about = "Decode block numbers from block hash prefixes"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    // Strictly sequential; output order matches the embedded list. A decode
    // failure aborts here, leaving only the blocks printed so far.
    for hash in BLOCK_HASHES {
        let prefixes = decode(hash)?;
        // println! supplies the blank-line separator after each block.
        println!("{}\n", block_report(hash, &prefixes));
    }

    Ok(())
}
