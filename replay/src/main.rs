use std::{env, error::Error, fs::{self, File}, path::Path};
use adxl345::{Address, Adxl345, PipelineConfig, PipelineError, RetryLimit};
use embedded_hal::delay::DelayNs;
use math::Axis;

mod bus;
use bus::{ReplayBus, ReplayError};

static RESULTS_DIR: &str = "analysis";

/// Recordings are replayed as fast as possible, calibration pauses are skipped.
/// 
struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Brings the replayed device into measurement mode and calibrates it on the start of the
/// recording, which is expected to be taken at rest.
/// 
fn prepare(adxl: &mut Adxl345<ReplayBus>, range_g: u8, samples: usize) -> Result<(), adxl345::Error<ReplayError>> {
    adxl.initialize_g(range_g)?;
    adxl.calibrate(samples, &mut NoDelay)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err("Usage: replay <recording.csv> [range in g] [sample interval in ms] [calibration samples]".into());
    }
    let range_g: u8 = args.get(2).map(|s| s.parse::<u8>()).transpose()?.unwrap_or(2);
    let delta_t: f64 = args.get(3).map(|s| s.parse::<f64>()).transpose()?.unwrap_or(10.0);

    let mut config = PipelineConfig {
        retry_limit: RetryLimit::Failures(16),
        ..Default::default()
    };
    if let Some(samples) = args.get(4) {
        config.calibration_samples = samples.parse::<usize>()?;
    }

    // Open the input CSV file.
    let in_path = Path::new(&args[1]);
    let bus = ReplayBus::from_reader(File::open(in_path)?)?;
    log::info!("Replaying {} samples from {}", bus.remaining(), in_path.display());

    // Every input CSV file gets its own folder in the results directory.
    let name = in_path.file_stem().and_then(|s| s.to_str()).unwrap_or("recording");
    let out_dir = format!("{}/{}", RESULTS_DIR, name);
    fs::create_dir_all(&out_dir)?;
    let mut writer = csv::Writer::from_path(format!("{}/{}", out_dir, "pipeline.csv"))?;
    writer.write_record([
        "time",
        "accel.x", "accel.y", "accel.z",
        "block.x", "block.y", "block.z",
        "iir.x", "iir.y", "iir.z",
        "velocity.x", "velocity.y", "velocity.z",
    ])?;

    let mut adxl = Adxl345::new(bus, Address::default(), config);
    if !adxl.probe() {
        return Err("Recording does not answer as an ADXL345".into());
    }
    prepare(&mut adxl, range_g, config.calibration_samples)?;

    let mut time = 0.0;
    loop {
        match adxl.process(delta_t) {
            Ok(()) => {},
            Err(PipelineError::FilterTimeout { collected, .. }) if adxl.bus().remaining() == 0 => {
                log::info!("End of recording, dropped {} trailing samples", collected);
                break;
            },
            Err(err) => return Err(err.into()),
        }
        time += delta_t;

        let mut record = vec![format!("{}", time)];
        for stage in [
            <Adxl345<ReplayBus>>::acceleration,
            <Adxl345<ReplayBus>>::block_filtered,
            <Adxl345<ReplayBus>>::iir_filtered,
            <Adxl345<ReplayBus>>::velocity,
        ] {
            for axis in Axis::ALL {
                record.push(format!("{}", stage(&adxl, axis)));
            }
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;

    let state = adxl.state();
    log::info!("Dead zone hits: {:?}, stall resets: {:?}", state.dead_zone_hits, state.stall_resets);
    Ok(())
}
