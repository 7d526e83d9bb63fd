// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Binary Record Reader: a sequential, typed, position-tracking reader over
//! a byte stream, with tagged framed record traversal (spec §4.1).
//!
//! The reader itself does not dispatch; the caller drives the loop (spec
//! §4.1: "Caller drives the dispatch loop"). See [`adapters::scenery`] for
//! the dispatch loop that walks scenery archives with this reader.
//!
//! [`adapters::scenery`]: crate::adapters::scenery

use std::io::{Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::Error;

/// A tagged framed record's header: a 16-bit type tag followed by a 32-bit
/// length, the length covering the frame's body (not including the header
/// itself).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct FrameHeader {
    pub tag: u16,
    pub length: u32,
}

/// Sequential reader over a byte stream, tracking its own offset.
pub struct Reader<R> {
    inner: R,
    offset: u64,
}

impl<R: Read + Seek> Reader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, offset: 0 }
    }

    /// The reader's current byte offset from the start of the stream.
    pub fn position(&self) -> u64 {
        self.offset
    }

    /// Bytes remaining between the current offset and `end` (e.g. a frame's
    /// recorded end offset). Saturates to 0 if `end` has already passed.
    pub fn remaining_bytes(&self, end: u64) -> u64 {
        end.saturating_sub(self.offset)
    }

    pub fn seek_to(&mut self, offset: u64) -> Result<(), Error> {
        self.inner
            .seek(SeekFrom::Start(offset))
            .map_err(|_| Error::UnexpectedEof)?;
        self.offset = offset;
        Ok(())
    }

    pub fn skip(&mut self, count: u64) -> Result<(), Error> {
        self.seek_to(self.offset + count)
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        let v = self.inner.read_u8().map_err(|_| Error::UnexpectedEof)?;
        self.offset += 1;
        Ok(v)
    }

    pub fn read_i8(&mut self) -> Result<i8, Error> {
        let v = self.inner.read_i8().map_err(|_| Error::UnexpectedEof)?;
        self.offset += 1;
        Ok(v)
    }

    pub fn read_u16(&mut self) -> Result<u16, Error> {
        let v = self
            .inner
            .read_u16::<LittleEndian>()
            .map_err(|_| Error::UnexpectedEof)?;
        self.offset += 2;
        Ok(v)
    }

    pub fn read_i16(&mut self) -> Result<i16, Error> {
        let v = self
            .inner
            .read_i16::<LittleEndian>()
            .map_err(|_| Error::UnexpectedEof)?;
        self.offset += 2;
        Ok(v)
    }

    pub fn read_u32(&mut self) -> Result<u32, Error> {
        let v = self
            .inner
            .read_u32::<LittleEndian>()
            .map_err(|_| Error::UnexpectedEof)?;
        self.offset += 4;
        Ok(v)
    }

    pub fn read_i32(&mut self) -> Result<i32, Error> {
        let v = self
            .inner
            .read_i32::<LittleEndian>()
            .map_err(|_| Error::UnexpectedEof)?;
        self.offset += 4;
        Ok(v)
    }

    pub fn read_u64(&mut self) -> Result<u64, Error> {
        let v = self
            .inner
            .read_u64::<LittleEndian>()
            .map_err(|_| Error::UnexpectedEof)?;
        self.offset += 8;
        Ok(v)
    }

    pub fn read_i64(&mut self) -> Result<i64, Error> {
        let v = self
            .inner
            .read_i64::<LittleEndian>()
            .map_err(|_| Error::UnexpectedEof)?;
        self.offset += 8;
        Ok(v)
    }

    pub fn read_f32(&mut self) -> Result<f32, Error> {
        let v = self
            .inner
            .read_f32::<LittleEndian>()
            .map_err(|_| Error::UnexpectedEof)?;
        self.offset += 4;
        Ok(v)
    }

    pub fn read_f64(&mut self) -> Result<f64, Error> {
        let v = self
            .inner
            .read_f64::<LittleEndian>()
            .map_err(|_| Error::UnexpectedEof)?;
        self.offset += 8;
        Ok(v)
    }

    /// Reads a fixed-width, NUL-padded string field.
    pub fn read_fixed_string(&mut self, len: usize) -> Result<String, Error> {
        let mut buf = vec![0u8; len];
        self.inner.read_exact(&mut buf).map_err(|_| Error::UnexpectedEof)?;
        self.offset += len as u64;
        let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        Ok(String::from_utf8_lossy(&buf[..end]).into_owned())
    }

    /// Reads a NUL-terminated string of unbounded length.
    pub fn read_cstring(&mut self) -> Result<String, Error> {
        let mut bytes = Vec::new();
        loop {
            let b = self.read_u8()?;
            if b == 0 {
                break;
            }
            bytes.push(b);
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Reads a tagged frame header and returns it together with the
    /// absolute offset at which the frame's body ends.
    ///
    /// Enforces that the child frame does not exceed `parent_end`, the
    /// parent frame's own end offset (spec §4.1: "the reader enforces that
    /// a sub-record's children do not exceed the parent's frame").
    pub fn read_frame_header(&mut self, parent_end: u64) -> Result<(FrameHeader, u64), Error> {
        let tag = self.read_u16()?;
        let length = self.read_u32()?;
        let end = self
            .offset
            .checked_add(length as u64)
            .ok_or(Error::CorruptedFrame)?;

        if end > parent_end {
            return Err(Error::CorruptedFrame);
        }

        Ok((FrameHeader { tag, length }, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn frame(tag: u16, body: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&tag.to_le_bytes());
        out.extend_from_slice(&(body.len() as u32).to_le_bytes());
        out.extend_from_slice(body);
        out
    }

    #[test]
    fn reads_primitive_types_little_endian() {
        let mut data = Vec::new();
        data.extend_from_slice(&42u16.to_le_bytes());
        data.extend_from_slice(&(-7i32).to_le_bytes());
        let mut reader = Reader::new(Cursor::new(data));
        assert_eq!(reader.read_u16().unwrap(), 42);
        assert_eq!(reader.read_i32().unwrap(), -7);
    }

    #[test]
    fn dispatch_loop_walks_children_within_parent_frame() {
        let child_a = frame(1, b"AAAA");
        let child_b = frame(2, b"BB");
        let mut body = Vec::new();
        body.extend_from_slice(&child_a);
        body.extend_from_slice(&child_b);

        let outer = frame(0, &body);
        let mut reader = Reader::new(Cursor::new(outer));

        let (outer_header, outer_end) = reader.read_frame_header(u64::MAX).unwrap();
        assert_eq!(outer_header.tag, 0);

        let mut tags = Vec::new();
        while reader.position() < outer_end {
            let (header, child_end) = reader.read_frame_header(outer_end).unwrap();
            tags.push(header.tag);
            reader.seek_to(child_end).unwrap();
        }

        assert_eq!(tags, vec![1, 2]);
    }

    #[test]
    fn corrupted_frame_length_overflowing_parent_is_an_error() {
        let mut data = Vec::new();
        data.extend_from_slice(&1u16.to_le_bytes());
        data.extend_from_slice(&1_000u32.to_le_bytes());
        let mut reader = Reader::new(Cursor::new(data));
        assert!(matches!(
            reader.read_frame_header(4),
            Err(Error::CorruptedFrame)
        ));
    }
}
