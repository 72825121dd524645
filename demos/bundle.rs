use std::error::Error;
use std::fs::File;
use std::io::Write;

use storezip::{build_archive, FileEntry, ZIP_MIME_TYPE};

fn render_invoice(number: u32) -> Vec<u8> {
    format!(
        "%PDF-1.4\n1 0 obj\n<< /Title (Invoice INV-{:04}) >>\nendobj\ntrailer\n<< /Root 1 0 R >>\n%%EOF\n",
        number
    )
    .into_bytes()
}

fn main() -> Result<(), Box<dyn Error>> {
    let entries: Vec<FileEntry> = (1..=3)
        .map(|number| FileEntry::new(format!("INV-{:04}.pdf", number), render_invoice(number)))
        .collect();

    let archive = build_archive(&entries)?;

    let mut file = File::create("invoices.zip")?;
    file.write_all(&archive)?;

    println!(
        "invoices.zip: {} entries, {} bytes ({})",
        entries.len(),
        archive.len(),
        ZIP_MIME_TYPE
    );

    Ok(())
}
