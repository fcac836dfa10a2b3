use std::path::PathBuf;

use chanarc_types::attachment::ThreadRef;
use clap::Parser;

/// Save the JSON and all files of an 8chan thread.
#[derive(Parser, Debug)]
#[command(name = "chanarc", version, about, long_about = None)]
pub struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase debug level (use -d for debug, -dd for trace)")]
    pub debug: u8,

    /// Re-download files that are already archived.
    #[arg(long)]
    pub overwrite: bool,

    /// Directory the 8chan/ tree is written into. Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Board name, e.g. `tech`
    pub board: String,

    /// Thread number
    pub thread_id: String,
}

impl Cli {
    pub fn thread_ref(&self) -> ThreadRef {
        ThreadRef::new(self.board.clone(), self.thread_id.clone())
    }

    pub fn base_dir(&self) -> std::io::Result<PathBuf> {
        match &self.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }
}

pub fn usage(program: &str) -> String {
    format!(
        "Quick and dirty 8chan Archiver\n\
         {0} - Save the JSON and all images for an 8chan post.\n\
         \tUsage: {0} <board> <thread_id>",
        program
    )
}
