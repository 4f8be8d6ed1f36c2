extern crate natural_spline;

use natural_spline::Spline;

fn main() {

    let x = vec![0.0, 1.0, 2.0, 4.0, 5.0, 6.0];
    let y = vec![1.0, -1.0, 0.0, 3.0, 1.0, 1.0];

    let spline = Spline::new(x, y).unwrap();
    let (x_values, y_values) = spline.evaluate_range(0.1).unwrap();

    println!("x;y");
    for (x, y) in x_values.iter().zip(y_values.iter()) {
        println!("{:.2};{:.4}", x, y);
    }
}
