/// Prints a graph with its spanning forest highlighted.
/// Usage: `cargo run --example draw | neato -Tsvg > forest.svg`
use adaptive_mst::input::from_str;
use adaptive_mst::output::draw_graph;

fn main() -> Result<(), adaptive_mst::MstError> {
    let input = "
            0,1,4
            1,2,1
            2,3,3
            3,0,2
            0,2,5
            3,4,7
            ";

    let engine = from_str(input)?;

    print!("{}", draw_graph(&engine)?);
    Ok(())
}
