use std::collections::VecDeque;
use std::fmt::Debug;

use galena_protocol::packets::Packet;
use galena_server::transport::PacketSink;

use crate::log;

pub struct FakePlayerConnection {
    pub outgoing: VecDeque<Packet>,
}

impl FakePlayerConnection {
    pub fn new() -> Self {
        Self {
            outgoing: VecDeque::new(),
        }
    }

    pub fn assert_none_outgoing(&mut self) {
        if let Some(packet) = self.outgoing.pop_front() {
            panic!(
                "\npacket assertion failed: expected no more packets,\n\tgot: {:?}\n",
                packet
            );
        }
    }

    pub fn skip_all_outgoing(&mut self) {
        self.outgoing.clear();
    }

    pub fn assert_outgoing(&mut self, expected: &Packet) {
        match self.outgoing.pop_front() {
            Some(packet) => {
                log!("Found packet with id: 0x{:x}", packet.packet_type().id());
                if packet != *expected {
                    panic!(
                        "\npacket assertion failed!\n\texpected: {:?}\n\tgot: {:?}\n",
                        expected, packet
                    );
                }
            }
            None => panic!("expected a packet, but there was none"),
        }
    }

    pub fn assert_outgoing_as<T, F>(&mut self, func: F)
    where
        T: TryFrom<Packet, Error = Packet> + Debug,
        F: FnOnce(&mut T),
    {
        match self.outgoing.pop_front() {
            Some(packet) => {
                log!("Found packet with id: 0x{:x}", packet.packet_type().id());
                match T::try_from(packet) {
                    Ok(mut packet) => func(&mut packet),
                    Err(packet) => panic!(
                        "\npacket assertion failed: wrong packet type,\n\tgot: {:?}\n",
                        packet
                    ),
                }
            }
            None => panic!("expected a packet, but there was none"),
        }
    }
}

impl PacketSink for FakePlayerConnection {
    fn send_packet_filtered(&mut self, packet: Packet, _through_listeners: bool) {
        self.outgoing.push_back(packet);
    }
}
