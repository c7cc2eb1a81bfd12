#![allow(dead_code)]

/// One directory entry value.
pub enum Value {
    /// type code, count, value bytes
    Raw(u16, u32, Vec<u8>),
    /// LONG pointer to a nested IFD
    Dir(Ifd),
    /// UNDEFINED maker note: header bytes, then an IFD whose offsets count
    /// from the same base as the enclosing one
    Note(Vec<u8>, Ifd),
}

#[derive(Default)]
pub struct Ifd {
    pub entries: Vec<(u16, Value)>,
}

impl Ifd {
    pub fn new() -> Self {
        Ifd::default()
    }

    pub fn with(mut self, id: u16, value: Value) -> Self {
        self.entries.push((id, value));
        self
    }
}

/// Lays out TIFF structures the way a tight writer does: every IFD is
/// followed by the out of line values of its entries in entry order,
/// nested directories inline, odd values padded to even length.
#[derive(Clone, Copy)]
pub struct TiffBuilder {
    pub le: bool,
}

impl TiffBuilder {
    pub const INTEL: TiffBuilder = TiffBuilder { le: true };
    pub const MOTOROLA: TiffBuilder = TiffBuilder { le: false };

    pub fn u16(&self, v: u16) -> [u8; 2] {
        if self.le {
            v.to_le_bytes()
        } else {
            v.to_be_bytes()
        }
    }

    pub fn u32(&self, v: u32) -> [u8; 4] {
        if self.le {
            v.to_le_bytes()
        } else {
            v.to_be_bytes()
        }
    }

    fn marker(&self) -> &'static [u8; 2] {
        if self.le {
            b"II"
        } else {
            b"MM"
        }
    }

    pub fn short(&self, v: u16) -> Value {
        self.shorts(&[v])
    }

    pub fn shorts(&self, v: &[u16]) -> Value {
        Value::Raw(3, v.len() as u32, v.iter().flat_map(|&x| self.u16(x)).collect())
    }

    pub fn long(&self, v: u32) -> Value {
        Value::Raw(4, 1, self.u32(v).to_vec())
    }

    pub fn ascii(&self, text: &str) -> Value {
        let mut bytes = text.as_bytes().to_vec();
        bytes.push(0);
        Value::Raw(2, bytes.len() as u32, bytes)
    }

    pub fn rational(&self, num: u32, den: u32) -> Value {
        self.rationals(&[(num, den)])
    }

    pub fn rationals(&self, v: &[(u32, u32)]) -> Value {
        let bytes = v
            .iter()
            .flat_map(|&(n, d)| self.u32(n).into_iter().chain(self.u32(d)))
            .collect();
        Value::Raw(5, v.len() as u32, bytes)
    }

    pub fn srational(&self, num: i32, den: i32) -> Value {
        let mut bytes = self.u32(num as u32).to_vec();
        bytes.extend(self.u32(den as u32));
        Value::Raw(10, 1, bytes)
    }

    pub fn undefined(&self, bytes: &[u8]) -> Value {
        Value::Raw(7, bytes.len() as u32, bytes.to_vec())
    }

    fn put(out: &mut [u8], pos: usize, bytes: &[u8]) {
        out[pos..pos + bytes.len()].copy_from_slice(bytes);
    }

    /// Appends `ifd` to `out`. Offsets are written relative to `base`.
    pub fn put_ifd(&self, out: &mut Vec<u8>, base: usize, ifd: &Ifd) {
        let n = ifd.entries.len();
        out.extend(self.u16(n as u16));
        let entries = out.len();
        out.resize(entries + 12 * n + 4, 0);
        for (i, (id, value)) in ifd.entries.iter().enumerate() {
            let e = entries + 12 * i;
            Self::put(out, e, &self.u16(*id));
            match value {
                Value::Raw(t, count, bytes) => {
                    Self::put(out, e + 2, &self.u16(*t));
                    Self::put(out, e + 4, &self.u32(*count));
                    if bytes.len() <= 4 {
                        Self::put(out, e + 8, bytes);
                    } else {
                        let at = self.u32((out.len() - base) as u32);
                        Self::put(out, e + 8, &at);
                        out.extend_from_slice(bytes);
                        if bytes.len() & 1 == 1 {
                            out.push(0);
                        }
                    }
                }
                Value::Dir(sub) => {
                    Self::put(out, e + 2, &self.u16(4));
                    Self::put(out, e + 4, &self.u32(1));
                    let at = self.u32((out.len() - base) as u32);
                    Self::put(out, e + 8, &at);
                    self.put_ifd(out, base, sub);
                }
                Value::Note(header, sub) => {
                    let start = out.len();
                    Self::put(out, e + 2, &self.u16(7));
                    let at = self.u32((start - base) as u32);
                    Self::put(out, e + 8, &at);
                    out.extend_from_slice(header);
                    self.put_ifd(out, base, sub);
                    let len = self.u32((out.len() - start) as u32);
                    Self::put(out, e + 4, &len);
                    if out.len() & 1 == 1 {
                        out.push(0);
                    }
                }
            }
        }
    }

    /// TIFF header followed by IFD0 at offset 8.
    pub fn tiff(&self, ifd0: &Ifd) -> Vec<u8> {
        let mut out = self.marker().to_vec();
        out.extend(self.u16(42));
        out.extend(self.u32(8));
        self.put_ifd(&mut out, 0, ifd0);
        out
    }

    /// Nikon type 3 maker note: signature, then an embedded TIFF header
    /// that the IFD offsets count from.
    pub fn nikon3_note(&self, ifd: &Ifd) -> Vec<u8> {
        let mut out = b"Nikon\0\x02\x10\0\0".to_vec();
        out.extend(self.marker());
        out.extend(self.u16(42));
        out.extend(self.u32(8));
        self.put_ifd(&mut out, 10, ifd);
        out
    }

    /// Fuji maker note: always little endian, offsets from its own start.
    pub fn fuji_note(ifd: &Ifd) -> Vec<u8> {
        let mut out = b"FUJIFILM".to_vec();
        out.extend(12u32.to_le_bytes());
        TiffBuilder::INTEL.put_ifd(&mut out, 0, ifd);
        out
    }
}

/// JPEG with a JFIF segment, the Exif APP1 segment and a stub scan.
pub fn jpeg_with_exif(tiff: &[u8]) -> Vec<u8> {
    let mut out = vec![0xff, 0xd8];
    out.extend([0xff, 0xe0, 0, 16]);
    out.extend(b"JFIF\0\x01\x01\0\0\x01\0\x01\0\0");
    out.extend(app1(tiff));
    out.extend([0xff, 0xda, 0, 2, 0x12, 0x34, 0xff, 0xd9]);
    out
}

pub fn app1(tiff: &[u8]) -> Vec<u8> {
    let mut out = vec![0xff, 0xe1];
    out.extend(((tiff.len() + 8) as u16).to_be_bytes());
    out.extend(b"Exif\0\0");
    out.extend_from_slice(tiff);
    out
}

/// One CIFF record: either inline data of up to 8 bytes or a block
/// stored in the heap.
pub enum Record {
    Inline(u16, [u8; 8]),
    Data(u16, Vec<u8>),
    Heap(u16, Vec<Record>),
}

/// Serializes a CIFF heap: record data first, then the record table, then
/// the table offset in the last four bytes.
pub fn ciff_heap(records: &[Record]) -> Vec<u8> {
    let mut heap = vec![];
    let mut table = (records.len() as u16).to_le_bytes().to_vec();
    for record in records {
        match record {
            Record::Inline(kind, data) => {
                table.extend(kind.to_le_bytes());
                table.extend_from_slice(data);
            }
            Record::Data(kind, data) => {
                table.extend(kind.to_le_bytes());
                table.extend((data.len() as u32).to_le_bytes());
                table.extend((heap.len() as u32).to_le_bytes());
                heap.extend_from_slice(data);
            }
            Record::Heap(kind, children) => {
                let sub = ciff_heap(children);
                table.extend(kind.to_le_bytes());
                table.extend((sub.len() as u32).to_le_bytes());
                table.extend((heap.len() as u32).to_le_bytes());
                heap.extend(sub);
            }
        }
    }
    let table_offset = heap.len() as u32;
    heap.extend(table);
    heap.extend(table_offset.to_le_bytes());
    heap
}

/// CRW file: 26 byte header, then the root heap.
pub fn crw(records: &[Record]) -> Vec<u8> {
    let mut out = b"II".to_vec();
    out.extend(26u32.to_le_bytes());
    out.extend(b"HEAPCCDR");
    out.extend([1, 0, 2, 0]);
    out.resize(26, 0);
    out.extend(ciff_heap(records));
    out
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
