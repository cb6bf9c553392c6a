use eagle_diagram::diagram::parse_cli;
use eagle_diagram::TimeFitness;

fn main() {
    let (title, logfile, outfile) = parse_cli();
    println!(
        "read training log from {} and plot to {}",
        logfile.to_str().unwrap(),
        outfile.to_str().unwrap()
    );
    let tf = TimeFitness::from_log(logfile);
    println!("loaded {} records", tf.time.len());
    let curve = tf.into_curve();
    curve.plot(outfile, &title).unwrap();
}
