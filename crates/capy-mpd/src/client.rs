//! MPD client implementation
//!
//! Plain line protocol over TCP:
//! - Server greets with `OK MPD <version>`
//! - Each command is answered by `key: value` lines ending in `OK`,
//!   or by a single `ACK [error@line] {command} message`

use crate::error::MpdError;
use crate::types::{Song, Status};
use log::debug;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

const GREETING_PREFIX: &str = "OK MPD ";

/// Connected MPD client. The connection is closed when dropped.
pub struct MpdClient {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
    version: String,
}

impl MpdClient {
    /// Connect to `host:port`, giving up on each resolved address after
    /// `connect_timeout`. Every later read and write is bounded by `io_timeout`.
    pub fn connect(
        host: &str,
        port: u16,
        connect_timeout: Duration,
        io_timeout: Duration,
    ) -> Result<Self, MpdError> {
        let mut last_error = None;

        for addr in (host, port).to_socket_addrs()? {
            match TcpStream::connect_timeout(&addr, connect_timeout) {
                Ok(stream) => return Self::handshake(stream, io_timeout),
                Err(e) => {
                    debug!("MPD connect to {} failed: {}", addr, e);
                    last_error = Some(e);
                }
            }
        }

        Err(match last_error {
            Some(e) => MpdError::Io(e),
            None => MpdError::NoAddress(format!("{}:{}", host, port)),
        })
    }

    fn handshake(stream: TcpStream, io_timeout: Duration) -> Result<Self, MpdError> {
        stream.set_read_timeout(Some(io_timeout))?;
        stream.set_write_timeout(Some(io_timeout))?;

        let writer = stream.try_clone()?;
        let mut reader = BufReader::new(stream);

        let greeting = read_line(&mut reader)?;
        let version = greeting
            .strip_prefix(GREETING_PREFIX)
            .ok_or_else(|| MpdError::Handshake(greeting.clone()))?
            .to_string();

        debug!("Connected to MPD {}", version);

        Ok(MpdClient {
            reader,
            writer,
            version,
        })
    }

    /// Protocol version announced in the greeting.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The song at the current playlist position, `None` when there is none.
    pub fn current_song(&mut self) -> Result<Option<Song>, MpdError> {
        let pairs = self.command("currentsong")?;
        if pairs.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Song { pairs }))
        }
    }

    pub fn status(&mut self) -> Result<Status, MpdError> {
        let pairs = self.command("status")?;
        Status::from_pairs(&pairs)
            .ok_or_else(|| MpdError::Protocol("status response without state".to_string()))
    }

    fn command(&mut self, command: &str) -> Result<Vec<(String, String)>, MpdError> {
        self.writer.write_all(command.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;

        let mut pairs = Vec::new();
        loop {
            let line = read_line(&mut self.reader)?;

            if line == "OK" {
                return Ok(pairs);
            }
            if let Some(message) = line.strip_prefix("ACK ") {
                return Err(MpdError::Ack(message.to_string()));
            }

            match line.split_once(": ") {
                Some((key, value)) => pairs.push((key.to_string(), value.to_string())),
                None => return Err(MpdError::Protocol(format!("malformed line {:?}", line))),
            }
        }
    }
}

fn read_line(reader: &mut BufReader<TcpStream>) -> Result<String, MpdError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(MpdError::Protocol("connection closed by server".to_string()));
    }

    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    Ok(trimmed.strip_suffix('\r').unwrap_or(trimmed).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlayState;
    use std::net::TcpListener;
    use std::thread;

    const TIMEOUT: Duration = Duration::from_millis(500);

    /// Serve one connection: send `greeting`, then answer each expected
    /// command with its scripted response.
    fn fake_server(greeting: &'static str, script: Vec<(&'static str, &'static str)>) -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            stream.write_all(greeting.as_bytes()).unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            for (expected, response) in script {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                assert_eq!(line.trim_end(), expected);
                stream.write_all(response.as_bytes()).unwrap();
            }
        });

        port
    }

    fn connect(port: u16) -> Result<MpdClient, MpdError> {
        MpdClient::connect("127.0.0.1", port, TIMEOUT, TIMEOUT)
    }

    #[test]
    fn test_current_song_and_status() {
        let port = fake_server(
            "OK MPD 0.23.5\n",
            vec![
                (
                    "currentsong",
                    "file: music/a.flac\nArtist: Boards of Canada\nTitle: Roygbiv\nOK\n",
                ),
                ("status", "volume: 70\nrepeat: 0\nstate: play\nOK\n"),
            ],
        );

        let mut client = connect(port).unwrap();
        assert_eq!(client.version(), "0.23.5");

        let song = client.current_song().unwrap().unwrap();
        assert_eq!(song.artist(), Some("Boards of Canada"));
        assert_eq!(song.title(), Some("Roygbiv"));

        let status = client.status().unwrap();
        assert_eq!(status.state, PlayState::Play);
        assert_eq!(status.volume, Some(70));
    }

    #[test]
    fn test_empty_playlist_has_no_current_song() {
        let port = fake_server("OK MPD 0.23.5\n", vec![("currentsong", "OK\n")]);

        let mut client = connect(port).unwrap();
        assert_eq!(client.current_song().unwrap(), None);
    }

    #[test]
    fn test_ack_is_reported() {
        let port = fake_server(
            "OK MPD 0.23.5\n",
            vec![("status", "ACK [4@0] {status} you don't have permission\n")],
        );

        let mut client = connect(port).unwrap();
        match client.status() {
            Err(MpdError::Ack(message)) => assert!(message.contains("permission")),
            other => panic!("expected ACK error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_bad_greeting_is_rejected() {
        let port = fake_server("HTTP/1.1 400 Bad Request\n", vec![]);

        assert!(matches!(connect(port), Err(MpdError::Handshake(_))));
    }

    #[test]
    fn test_connection_refused() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        assert!(matches!(connect(port), Err(MpdError::Io(_))));
    }

    #[test]
    fn test_silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            thread::sleep(TIMEOUT * 3);
            drop(stream);
        });

        let short = Duration::from_millis(100);
        let result = MpdClient::connect("127.0.0.1", port, TIMEOUT, short);
        assert!(matches!(result, Err(MpdError::Io(_))));

        server.join().unwrap();
    }
}
