// One astro_blaster server per test binary, shared by every test in it.
use std::{
    net::SocketAddr,
    sync::{OnceLock, mpsc},
    time::Duration,
};

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    addr: SocketAddr,
}

impl TestServer {
    #[allow(dead_code)]
    pub fn http_url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    #[allow(dead_code)]
    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }
}

// Starts the server on first use. It runs on its own thread and runtime so it
// outlives the per-test `#[tokio::test]` runtimes.
pub fn server() -> &'static TestServer {
    SERVER.get_or_init(|| {
        let (addr_tx, addr_rx) = mpsc::channel::<SocketAddr>();
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("local addr");
                addr_tx.send(addr).expect("publish server addr");
                astro_blaster::run(listener).await.expect("server failed");
            });
        });

        let addr = addr_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("server should bind in time");
        wait_until_accepting(addr);
        TestServer { addr }
    })
}

fn wait_until_accepting(addr: SocketAddr) {
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    panic!("server at {addr} did not accept connections in time");
}
