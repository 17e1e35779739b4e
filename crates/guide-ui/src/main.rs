#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Guide settings front end. Mounts the options panel in the browser; natively it
//! only lists the flags the panel controls.

#[cfg(target_arch = "wasm32")]
fn main() {
    guide_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    native::report(&mut std::io::stderr().lock())
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use guide_ui::core::settings::SettingsFlag;
    use std::io::{self, Write};

    pub(super) fn report(out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "guide-ui renders in the browser; build it for wasm32 with `trunk build`."
        )?;
        writeln!(out, "Options panel flags:")?;
        for flag in SettingsFlag::all() {
            writeln!(out, "  {:<16} {}: {}", flag.to_string(), flag.scope(), flag.title())?;
        }
        Ok(())
    }

}
