use std::process::ExitCode;

fn main() -> ExitCode {
    let code = yt2gif::app::convert_main(std::env::args_os());
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
