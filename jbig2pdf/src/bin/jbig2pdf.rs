use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process,
};

use jbig2pdf::{AssembleError, IdAllocator, InputSet, PagePolicy};
use structopt::StructOpt;

/// Build a PDF from JBIG2 pages and the symbol table they share.
///
/// Without a basename the files `symboltable` and `page-*` are used.
#[derive(StructOpt, Debug)]
#[structopt(name = "jbig2pdf")]
struct Opt {
    /// Use `<basename>.sym` and `<basename>.[0-9]*`
    basename: Option<String>,

    /// Directory containing the input files
    #[structopt(short = "C", long, parse(from_os_str), default_value = ".")]
    dir: PathBuf,

    /// Output file, standard output if omitted
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Abort if a page file cannot be read instead of skipping it
    #[structopt(long)]
    strict: bool,
}

fn run(opt: &Opt) -> Result<(), AssembleError> {
    let inputs = InputSet::discover(&opt.dir, opt.basename.as_deref())?;
    let policy = if opt.strict { PagePolicy::Fail } else { PagePolicy::Skip };

    let ids = IdAllocator::new();
    let assembly = inputs.assemble(&ids, policy)?;
    if !assembly.skipped.is_empty() {
        log::warn!("{} page files skipped", assembly.skipped.len());
    }

    log::debug!("Encode PDF content");
    let pdf = assembly.document.to_bytes();

    match &opt.output {
        Some(path) => {
            log::debug!("Write to {}", path.display());
            fs::write(path, &pdf).map_err(|source| AssembleError::Io {
                path: path.clone(),
                source,
            })
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(&pdf)
                .and_then(|_| out.flush())
                .map_err(|source| AssembleError::Io {
                    path: PathBuf::from("<stdout>"),
                    source,
                })
        }
    }
}

pub fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    if let Err(e) = run(&opt) {
        log::error!("{:?}", e);
        eprintln!("jbig2pdf: {}", e);
        if e.is_usage() {
            eprintln!("Usage: jbig2pdf [file_basename] > out.pdf");
        }
        process::exit(1);
    }
}
