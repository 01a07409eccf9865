use qsdecode_parser::{Actor, Input, Parser, ParserOptions};

/// Prints every output byte next to the state it was produced in.
#[derive(Default)]
struct TracingActor {
    line: Vec<u8>,
}

impl Actor for TracingActor {
    fn put(&mut self, byte: u8) {
        if byte == b'\n' {
            println!("line: {}", String::from_utf8_lossy(&self.line));
            self.line.clear();
        } else {
            self.line.push(byte);
        }
    }
}

fn main() {
    let mut parser = Parser::new(ParserOptions::default().with_prefix("QS_"));
    let mut actor = TracingActor::default();

    for &byte in b"name=J%C3%B6rg+M&title=say%20%22hi%22&=junk&flag" {
        parser.feed(Input::Byte(byte), &mut actor);
        println!("{:?} after {:?}", parser.state(), byte as char);
    }
    parser.finish(&mut actor);
}
