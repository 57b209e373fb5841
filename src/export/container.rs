//! Single-page PDF and EPS documents wrapping a JPEG-encoded raster of the figure.

/// A PDF 1.4 document with one `page_w x page_h` point page showing the JPEG image full-page.
pub fn pdf(jpeg: &[u8], pixel_w: u32, pixel_h: u32, page_w: u32, page_h: u32) -> Vec<u8> {
    let mut doc: Vec<u8> = Vec::with_capacity(jpeg.len() + 1024);
    let mut offsets = Vec::with_capacity(5);
    doc.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    let mut object = |doc: &mut Vec<u8>, body: &[u8]| {
        offsets.push(doc.len());
        doc.extend_from_slice(format!("{} 0 obj\n", offsets.len()).as_bytes());
        doc.extend_from_slice(body);
        doc.extend_from_slice(b"\nendobj\n");
    };

    object(&mut doc, b"<< /Type /Catalog /Pages 2 0 R >>");
    object(&mut doc, b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>");
    object(
        &mut doc,
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {page_w} {page_h}] \
             /Resources << /XObject << /Im0 4 0 R >> >> /Contents 5 0 R >>"
        )
        .as_bytes(),
    );

    let mut image = format!(
        "<< /Type /XObject /Subtype /Image /Width {pixel_w} /Height {pixel_h} \
         /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /DCTDecode /Length {} >>\nstream\n",
        jpeg.len()
    )
    .into_bytes();
    image.extend_from_slice(jpeg);
    image.extend_from_slice(b"\nendstream");
    object(&mut doc, &image);

    let content = format!("q {page_w} 0 0 {page_h} 0 0 cm /Im0 Do Q");
    object(
        &mut doc,
        format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        )
        .as_bytes(),
    );

    let xref = doc.len();
    let mut table = format!("xref\n0 {}\n0000000000 65535 f \n", offsets.len() + 1);
    for offset in &offsets {
        table.push_str(&format!("{:010} 00000 n \n", offset));
    }
    table.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        offsets.len() + 1,
        xref
    ));
    doc.extend_from_slice(table.as_bytes());
    doc
}

/// An EPS (PostScript level 2) file with a `box_w x box_h` point bounding box showing the JPEG
/// image, hex encoded in-line.
pub fn eps(jpeg: &[u8], pixel_w: u32, pixel_h: u32, box_w: u32, box_h: u32) -> Vec<u8> {
    let mut out = format!(
        "%!PS-Adobe-3.0 EPSF-3.0\n\
         %%BoundingBox: 0 0 {box_w} {box_h}\n\
         %%LanguageLevel: 2\n\
         %%Pages: 1\n\
         %%EndComments\n\
         gsave\n\
         {box_w} {box_h} scale\n\
         /DeviceRGB setcolorspace\n\
         << /ImageType 1 /Width {pixel_w} /Height {pixel_h} /BitsPerComponent 8\n   \
         /Decode [0 1 0 1 0 1] /ImageMatrix [{pixel_w} 0 0 -{pixel_h} 0 {pixel_h}]\n   \
         /DataSource currentfile /ASCIIHexDecode filter /DCTDecode filter >> image\n"
    );
    out.reserve(jpeg.len() * 2 + jpeg.len() / 32 + 64);
    for chunk in jpeg.chunks(32) {
        for byte in chunk {
            out.push_str(&format!("{:02X}", byte));
        }
        out.push('\n');
    }
    out.push_str(">\ngrestore\nshowpage\n%%EOF\n");
    out.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    #[test]
    fn pdf_offsets_point_at_objects() {
        let doc = pdf(&[0xFF, 0xD8, 0xFF, 0xD9], 2, 1, 800, 500);
        assert!(doc.starts_with(b"%PDF-1.4"));
        assert!(doc.ends_with(b"%%EOF\n"));
        assert!(find(&doc, b"/MediaBox [0 0 800 500]").is_some());

        let text = String::from_utf8_lossy(&doc).into_owned();
        let xref_at: usize = text
            .rsplit("startxref\n")
            .next()
            .and_then(|tail| tail.lines().next())
            .and_then(|n| n.parse().ok())
            .unwrap();
        assert!(doc[xref_at..].starts_with(b"xref"));

        let entries: Vec<usize> = text[text.find("0000000000 65535 f").unwrap()..]
            .lines()
            .skip(1)
            .take(5)
            .map(|l| l[..10].parse().unwrap())
            .collect();
        for (i, offset) in entries.iter().enumerate() {
            let header = format!("{} 0 obj", i + 1);
            assert!(doc[*offset..].starts_with(header.as_bytes()));
        }
    }

    #[test]
    fn eps_carries_bounding_box_and_hex_data() {
        let doc = String::from_utf8(eps(&[0xFF, 0xD8, 0x00], 4, 3, 400, 300)).unwrap();
        assert!(doc.starts_with("%!PS-Adobe-3.0 EPSF-3.0"));
        assert!(doc.contains("%%BoundingBox: 0 0 400 300"));
        assert!(doc.contains("/ImageMatrix [4 0 0 -3 0 3]"));
        assert!(doc.contains("FFD800\n>"));
    }
}
