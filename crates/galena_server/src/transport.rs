use galena_protocol::packets::Packet;

/// Outbound handoff from the simulation to one connection's transport.
///
/// Sends are fire-and-forget; the sink owns delivery and the caller never
/// blocks on it.
pub trait PacketSink {
    /// Hands a packet to the transport, visiting packet listeners first.
    fn send_packet(&mut self, packet: Packet) {
        self.send_packet_filtered(packet, true);
    }

    /// Like [`PacketSink::send_packet`], but `through_listeners` selects
    /// whether packet listeners get to see the packet. How the flag is
    /// honored is the transport's business.
    fn send_packet_filtered(&mut self, packet: Packet, through_listeners: bool);
}
