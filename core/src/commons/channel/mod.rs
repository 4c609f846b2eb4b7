mod channel;

pub use channel::{ChannelData, MpscChannel, SenderEnd};
