use rust_topath::errors::PathError;
use rust_topath::tokenize;

fn main() -> Result<(), PathError> {
    for path in std::env::args().skip(1) {
        match tokenize(&path) {
            Ok(segments) => println!("{:?}", segments),
            Err(err) => {
                eprintln!("{}\n{}", err, err.pointer(&path));
                return Err(err);
            }
        }
    }

    Ok(())
}
