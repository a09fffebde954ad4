use anyhow::Result;
use lincheck::input::{Console, RealSource};
use lincheck::system::LinearSystem;

fn main() {
    lincheck::init_logger!();

    if let Err(err) = run(&mut Console) {
        // A dead input stream or similar is reported, not propagated; the run still ends cleanly.
        println!("runtime error: {err:#}");
    }
}

fn run<S: RealSource>(input: &mut S) -> Result<()> {
    println!("Linear equation system checker.");

    let mut sys2 = LinearSystem::<2>::labeled("2×2");
    drive(&mut sys2, input)?;

    let mut sys3 = LinearSystem::<3>::labeled("3×3 (SLAE)");
    drive(&mut sys3, input)?;

    // A deliberately mismatched candidate exercises the dimension guard.
    println!();
    println!("--- checking a 4-component vector against the {} system ---", sys2.label());
    println!("{}", sys2.check(&[1.0, 2.0, 3.0, 4.0]));

    Ok(())
}

/// One full configure → display → read → check pass over a single system.
fn drive<S: RealSource, const N: usize>(sys: &mut LinearSystem<N>, input: &mut S) -> Result<()> {
    println!();
    println!("=== configuring the {} system ===", sys.label());
    println!("enter the coefficients, row by row:");
    sys.set_coefficients(input)?;

    println!();
    println!("=== the {} system ===", sys.label());
    print!("{sys}");

    println!();
    println!("=== checking a candidate for the {} system ===", sys.label());
    println!("enter the {} components of the candidate vector:", sys.size());
    let x = sys.read_vector(input)?;
    println!("{}", sys.check(x.as_slice()));

    Ok(())
}
