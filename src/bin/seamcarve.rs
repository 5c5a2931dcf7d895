// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{value_t, App, Arg, ArgMatches};
use failure::{Error, ResultExt};
use seamcarver::{Carve, SeamCarver, SeamFinder};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let matches = App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image shrinking by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; the format follows the extension")
                .short("o")
                .long("output")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("width")
                .help("Target width (defaults to the current width)")
                .short("w")
                .long("width")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("height")
                .help("Target height (defaults to the current height)")
                .short("H")
                .long("height")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("energy")
                .help("Write the energy map of the input instead of carving")
                .long("energy")
                .conflicts_with("mark"),
        )
        .arg(
            Arg::with_name("mark")
                .help("Write the input with its next vertical seam painted red")
                .long("mark"),
        )
        .arg(
            Arg::with_name("verbose")
                .help("Log every seam removed")
                .short("v")
                .long("verbose"),
        )
        .get_matches();

    let level = if matches.is_present("verbose") { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("seamcarver={},seamcarve={}", level, level).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(err) = run(&matches) {
        let chain: Vec<String> = err.iter_chain().map(|cause| cause.to_string()).collect();
        tracing::error!("{}", chain.join(": "));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    // Both are required by clap.
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let picture = image::open(input).with_context(|_| format!("reading {}", input))?;
    let mut carver = SeamCarver::new(&picture)?;

    if matches.is_present("energy") {
        carver
            .energy_image()
            .save(output)
            .with_context(|_| format!("writing {}", output))?;
        return Ok(());
    }

    if matches.is_present("mark") {
        let seam = carver.find_vertical_seam();
        carver
            .seam_image(&seam, Carve::Width)?
            .save(output)
            .with_context(|_| format!("writing {}", output))?;
        return Ok(());
    }

    let new_width = if matches.is_present("width") {
        value_t!(matches, "width", u32).unwrap_or_else(|e| e.exit())
    } else {
        carver.width()
    };
    let new_height = if matches.is_present("height") {
        value_t!(matches, "height", u32).unwrap_or_else(|e| e.exit())
    } else {
        carver.height()
    };

    carver
        .carve(new_width, new_height)?
        .save(output)
        .with_context(|_| format!("writing {}", output))?;
    Ok(())
}
