use std::error::Error;
use std::process::ExitCode;

mod config;
mod library;
mod organize;
mod runtime;
mod tree;

#[cfg(test)]
mod test_support;

/// `error: cause: cause ...`
fn error_chain(err: &dyn Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

fn main() -> ExitCode {
    match runtime::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tuneshelf: {}", error_chain(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}
