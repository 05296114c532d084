use std::path::PathBuf;
use std::time::Instant;

use bpaf::Bpaf;
use lut3d::backend::d64::D64;
use lut3d::backend::decd::DecD;
use lut3d::backend::Backend;
use lut3d::driver::{self, PROBE_POINTS};

#[derive(Bpaf, Clone, Debug)]
#[bpaf(options, version)]
struct Args {
    /// Significant decimal digits used for the DecD arbitrary-precision
    /// backend, and for formatting every output value.
    #[bpaf(
        short('p'),
        long,
        argument("4-50"),
        fallback(16),
        display_fallback,
        guard(|v| (4..=50).contains(v), "precision must be between 4 and 50")
    )]
    precision: usize,
    /// Also run the DecD arbitrary-precision backend and check it agrees
    /// with D64 after rounding, instead of running D64 alone.
    #[bpaf(short('d'), long)]
    check_decimal: bool,
    /// Path to the CUBE-format LUT to probe.
    #[bpaf(positional("CUBE_FILE"))]
    file: PathBuf,
}

impl Args {
    fn execute(self) -> Result<String, String> {
        let text = std::fs::read_to_string(&self.file).map_err(|e| format!("failed to read {:?}: {e}", self.file))?;
        let grid = lut3d::cube::parse(&text).map_err(|e| e.to_string())?;
        log::info!("loaded {:?} ({:?}): {}x{}x{}", self.file, grid.title(), grid.dims().0, grid.dims().1, grid.dims().2);

        let d64 = D64;
        let grid_d64 = d64.convert_grid(&grid);

        let time = Instant::now();
        #[cfg(feature = "rayon")]
        let output = driver::par_run_probes(&d64, &grid_d64, &PROBE_POINTS, self.precision);
        #[cfg(not(feature = "rayon"))]
        let output = driver::run_probes(&d64, &grid_d64, &PROBE_POINTS, self.precision);
        print!("{output}");
        log::debug!("ran {} probes against D64 in {:.2?}", PROBE_POINTS.len(), time.elapsed());

        if self.check_decimal {
            let decd = DecD::new(self.precision as u32).map_err(|e| e.to_string())?;
            let grid_decd = decd.convert_grid(&grid);
            let time = Instant::now();
            let output = driver::run_probes(&decd, &grid_decd, &PROBE_POINTS, self.precision);
            print!("{output}");
            log::debug!("ran {} probes against {} in {:.2?}", PROBE_POINTS.len(), decd.name(), time.elapsed());
        }

        Ok(format!("probed {:?} ", self.file))
    }
}

fn main() {
    env_logger::builder().parse_env("RUST_LOG").init();

    let time = Instant::now();
    match args().run().execute() {
        Ok(s) => eprintln!("Finished {s}in {:.2?}", time.elapsed()),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        },
    }
}
