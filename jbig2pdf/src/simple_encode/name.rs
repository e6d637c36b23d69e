use crate::{
    pdf::Name,
    writer::{Encoder, Writer},
};

use super::SimpleEncoder;

fn is_delimiter(chr: u8) -> bool {
    matches!(
        chr,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

/// Bytes that can appear in a name without `#xx` escape.
fn is_regular(chr: u8) -> bool {
    chr.is_ascii_graphic() && !is_delimiter(chr) && chr != b'#'
}

impl Encoder<Name> for SimpleEncoder {
    fn encoded_len(n: &Name) -> usize {
        n.iter().map(|c| if is_regular(*c) { 1 } else { 3 }).sum::<usize>() + 1
    }

    fn write_to(n: &Name, writer: &mut dyn Writer) {
        let mut last_write = 0;
        writer.write(b"/");
        for (index, &c) in n.iter().enumerate() {
            if !is_regular(c) {
                writer.write(&n[last_write..index]);
                last_write = index + 1;
                writer.write(b"#");
                writer.write(hex::encode(c.to_be_bytes()).as_bytes())
            }
        }
        writer.write(&n[last_write..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &[u8], expected: &[u8]) {
        let name = Name::from(name);
        let encoded_len = SimpleEncoder::encoded_len(&name);
        let mut out = Vec::new();
        SimpleEncoder::write_to(&name, &mut out);
        assert_eq!(
            out,
            expected,
            "Expected {}, got {}",
            String::from_utf8_lossy(expected),
            String::from_utf8_lossy(&out)
        );
        assert_eq!(encoded_len, out.len());
    }

    #[test]
    fn no_delimiters() {
        check(b"JBIG2Globals", b"/JBIG2Globals");
        check(b"HelloWorld!", b"/HelloWorld!");
    }

    #[test]
    fn delimiter_in_the_middle() {
        check(b"Hello World!", b"/Hello#20World!");
    }

    #[test]
    fn delimiter_start_and_end() {
        check(b" HelloWorld!", b"/#20HelloWorld!");
        check(b"HelloWorld! ", b"/HelloWorld!#20");
    }

    #[test]
    fn only_delimiters() {
        check(b"   ", b"/#20#20#20");
        check(b"(/)", b"/#28#2f#29");
    }

    #[test]
    fn number_sign_and_binary() {
        check(b"A#B", b"/A#23B");
        check(b"\xff", b"/#ff");
    }
}
