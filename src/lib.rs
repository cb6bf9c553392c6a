use chrono::prelude::*;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
pub mod diagram;

pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");

pub const DT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A master log line carries at least
/// `date time, size <bytes>, fitness <fraction>`.
pub const MIN_TOKENS: usize = 6;

/// The (datetime, fitness) records parsed from a master training log,
/// column-wise and in file order.
#[derive(Debug, Clone)]
pub struct TimeFitness {
    pub time: Vec<NaiveDateTime>,
    pub fitness: Vec<f64>,
}

impl TimeFitness {
    pub fn new(capacity: usize) -> TimeFitness {
        let time: Vec<NaiveDateTime> = Vec::with_capacity(capacity);
        let fitness: Vec<f64> = Vec::with_capacity(capacity);
        TimeFitness { time, fitness }
    }

    /// Reads the whole training log and parses it with `from_lines`.
    /// Failing to open the logfile is fatal,
    /// unreadable lines are reported and skipped.
    pub fn from_log(fin: PathBuf) -> TimeFitness {
        let file = File::open(&fin).unwrap();
        let buf = BufReader::new(file);
        let mut lines: Vec<String> = Vec::with_capacity(10000 as usize);
        for l in buf.lines() {
            match l {
                Ok(l_ok) => lines.push(l_ok),
                Err(l_err) => {
                    println!("Err, could not read/unwrap line {}", l_err);
                    continue;
                }
            }
        }
        TimeFitness::from_lines(lines.iter())
    }

    /// Parses the master log lines, keeping valid records in input order.
    /// Lines that are too short or fail datetime/fitness parsing are dropped.
    pub fn from_lines<I, S>(lines: I) -> TimeFitness
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut timefitness = TimeFitness::new(10000 as usize);
        for l in lines {
            match parse_log_line(l.as_ref()) {
                Some((dt, f)) => {
                    timefitness.time.push(dt);
                    timefitness.fitness.push(f);
                }
                None => continue,
            }
        }
        timefitness
    }

    /// Turns the records into the training curve to plot:
    /// hours elapsed since the first record against accuracy percentage.
    /// Panics when the log holds no valid record, there is nothing to plot.
    pub fn into_curve(self) -> TrainingCurve {
        let start: NaiveDateTime = match self.time.first() {
            Some(t) => *t,
            None => panic!("no valid records found in the training log"),
        };
        let hours: Vec<f64> = self
            .time
            .iter()
            .map(|t| (*t - start).num_seconds() as f64 / 3600.)
            .collect();
        let accuracy: Vec<f64> = self.fitness.iter().map(|f| f * 100.).collect();
        TrainingCurve { hours, accuracy }
    }
}

impl std::fmt::Display for TimeFitness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "datetime, fitness\n")?;
        for (t, w) in self.time.iter().zip(self.fitness.iter()) {
            write!(f, "{},{}\n", t.to_string(), w)?
        }
        Ok(())
    }
}

/// Extracts (datetime, fitness) from one master log line.
/// Tokens 0 and 1 form the datetime, token 1 ends with a comma to strip;
/// the last token is the fitness fraction.
/// NaN fitness is coerced to 0 and the record is kept.
fn parse_log_line(line: &str) -> Option<(NaiveDateTime, f64)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_TOKENS {
        return None;
    }
    let (cut, _) = tokens[1].char_indices().last()?;
    let datetime = format!("{} {}", tokens[0], &tokens[1][..cut]);
    let dt = NaiveDateTime::parse_from_str(&datetime, DT_FORMAT).ok()?;
    let mut fitness = tokens.last()?.parse::<f64>().ok()?;
    if fitness.is_nan() {
        fitness = 0.;
    }
    Some((dt, fitness))
}

/// The transformed series, elapsed hours and accuracy percentage,
/// ready for the time-accuracy diagram.
#[derive(Debug, Clone)]
pub struct TrainingCurve {
    pub hours: Vec<f64>,
    pub accuracy: Vec<f64>,
}

impl TrainingCurve {
    /// Plots the curve to the given file,
    /// svg extension gives an svg, anything else goes through the bitmap
    /// backend which picks the raster format from the extension.
    pub fn plot(&self, fout: PathBuf, title: &str) -> Result<(), Box<dyn std::error::Error>> {
        match fout.extension().and_then(|e| e.to_str()) {
            Some("svg") => {
                let root = SVGBackend::new(&fout, (1600, 800)).into_drawing_area();
                self.draw(root, title)
            }
            _ => {
                let root = BitMapBackend::new(&fout, (1600, 800)).into_drawing_area();
                self.draw(root, title)
            }
        }
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: DrawingArea<DB, Shift>,
        title: &str,
    ) -> Result<(), Box<dyn std::error::Error>>
    where
        DB::ErrorType: 'static,
    {
        let (xmin, xmax) = min_and_max(&self.hours[..]);
        let xmargin = (xmax - xmin) / 20.;
        let xmin = xmin - xmargin;
        let xmax = xmax + xmargin;
        let (ymin, ymax) = min_and_max(&self.accuracy[..]);
        let ymargin = (ymax - ymin) / 20.;
        let ymin = ymin - ymargin;
        let ymax = ymax + ymargin;
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption(title, ("sans-serif", 32))
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d(xmin..xmax, ymin..ymax)?;
        chart
            .configure_mesh()
            .bold_line_style(RGBColor(150, 150, 150).stroke_width(1))
            .set_all_tick_mark_size(2)
            .label_style(("sans-serif", 24))
            .x_desc("Time (h)")
            .y_desc("Accuracy (%)")
            .y_label_formatter(&|y: &f64| format!("{:5}", y))
            .draw()?;
        let line = LineSeries::new(
            self.hours
                .iter()
                .zip(self.accuracy.iter())
                .map(|(x, y)| (*x, *y)),
            RGBColor(10, 10, 180).stroke_width(2),
        );
        chart.draw_series(line)?;
        root.present()?;
        Ok(())
    }
}

pub fn min_and_max<T: std::cmp::PartialOrd + Copy>(s: &[T]) -> (T, T) {
    let mut self_iter = s.iter();
    let (mut min, mut max) = match self_iter.next() {
        Some(v) => (*v, *v),
        None => panic!("could not iterate over slice"),
    };
    for es in self_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    return (min, max);
}
