use approx::assert_relative_eq;
use flight_core::{Label, LabeledSample, Sample};
use flight_report::{read_csv, CsvSink, FlightReport, ReportingSink};
use std::fs::{self, File};
use uuid::Uuid;

fn flight(n: u32) -> Vec<LabeledSample> {
    let mut fuel = 0.0;
    (0..n)
        .map(|t| {
            let speed = 200.0 + 25.0 * t as f64 + 0.123;
            fuel += 0.5 + 0.01 * speed;
            LabeledSample::new(
                Sample {
                    time: t,
                    altitude: 300.0 * t as f64 + 1.0 / 3.0,
                    speed,
                    climb_rate: 300.0 - t as f64 / 7.0,
                    fuel_used: fuel,
                    heading: (0.5 * t as f64).rem_euclid(360.0),
                },
                if t % 4 == 3 { Label::Anomaly } else { Label::Normal },
            )
        })
        .collect()
}

#[test]
fn csv_sink_writes_readable_file() {
    let path = std::env::temp_dir().join(format!("flight-report-{}.csv", Uuid::new_v4()));
    let samples = flight(12);
    let report = FlightReport::new(Uuid::new_v4(), samples.clone(), vec![0.5; 12]).unwrap();

    let mut sink = CsvSink::new(&path);
    assert!(sink.is_enabled());
    sink.consume(&report).unwrap();

    let back = read_csv(File::open(&path).unwrap()).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(back, samples);
    assert_eq!(back.iter().filter(|s| s.is_anomaly()).count(), 3);
    assert_relative_eq!(back[11].sample.fuel_used, report.summary().total_fuel_used);
}

#[test]
fn csv_sink_reports_missing_directory() {
    let path = std::env::temp_dir()
        .join(format!("missing-{}", Uuid::new_v4()))
        .join("out.csv");
    let report = FlightReport::new(Uuid::new_v4(), flight(2), vec![0.5; 2]).unwrap();

    let err = CsvSink::new(path).consume(&report).unwrap_err();
    assert!(matches!(err, flight_core::Error::Io(_)));
}
