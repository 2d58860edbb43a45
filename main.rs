use adder_core::report::SumReport;

fn main() {
    env_logger::init();

    let num1 = 5;
    let num2 = 10;
    let report = SumReport::compute(num1, num2);
    log::debug!("computed {} + {} = {}", num1, num2, report.sum());
    println!("{}", report);
}
