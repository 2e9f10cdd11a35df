mod decode;
mod roundtrip;
