/// Port to the notification/confirmation surface and the print subsystem.
pub trait Shell {
    /// Binary confirm/cancel query. `true` means the user confirmed.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Fire-and-forget notification.
    fn notify(&mut self, message: &str);

    /// Hand a rendered page off to the print subsystem.
    fn print(&mut self, document: &str);
}
