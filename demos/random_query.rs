extern crate natural_spline;

use natural_spline::{Curvature, IntervalLookup, Spline, SplineOptions};
use rand::Rng;

fn main() {

    let x = vec![0.0, 1.0, 2.0, 4.0, 5.0, 6.0];
    let y = vec![1.0, -1.0, 0.0, 3.0, 1.0, 1.0];

    let options = SplineOptions::new(Curvature::Exact, IntervalLookup::Containing);
    let spline = Spline::with_options(x, y, options).unwrap();

    let (x_min, x_max) = spline.domain();
    let query = rand::thread_rng().gen_range(x_min..=x_max);

    println!("S({:.4}) = {:.4}", query, spline.evaluate(query).unwrap());
}
