pub(crate) mod contents {
    const SESSION_TOKEN_PLACEHOLDER: &str = "{{SESSION_TOKEN}}";

    /// Renders the bridge page for the given session token.
    pub(crate) fn index_html(session_token: &str) -> String {
        INDEX_HTML.replace(SESSION_TOKEN_PLACEHOLDER, session_token)
    }

    const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>dapp wallet bridge</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 40rem; margin: 3rem auto; }
    #status { padding: 0.75rem; border-radius: 0.5rem; background: #f2f2f2; }
    .error { color: #b00020; }
  </style>
</head>
<body>
  <h1>dapp wallet bridge</h1>
  <p>Keep this tab open while the command line is using your wallet.</p>
  <div id="status">Waiting for wallet...</div>
  <script>
    const TOKEN = "{{SESSION_TOKEN}}";
    const POLL_MS = 1000;
    const statusEl = document.getElementById("status");
    let prompting = false;
    let sending = false;

    function show(text, isError) {
      statusEl.textContent = text;
      statusEl.className = isError ? "error" : "";
    }

    async function api(method, path, body) {
      const res = await fetch("/api" + path, {
        method,
        headers: { "Content-Type": "application/json", "X-Session-Token": TOKEN },
        body: body === undefined ? undefined : JSON.stringify(body),
      });
      return res.json();
    }

    async function report(accounts) {
      if (!accounts || accounts.length === 0) {
        await api("POST", "/connection", { status: "disconnected" });
        show("No account connected.");
        return;
      }
      const chainId = parseInt(await window.ethereum.request({ method: "eth_chainId" }), 16);
      await api("POST", "/connection", { status: "connected", address: accounts[0], chainId });
      show("Connected " + accounts[0] + " on chain " + chainId + ".");
    }

    async function prompt() {
      prompting = true;
      try {
        const accounts = await window.ethereum.request({ method: "eth_requestAccounts" });
        await report(accounts);
      } catch (err) {
        await api("POST", "/connection", { status: "rejected", reason: err.message || String(err) });
        show("Connection rejected: " + (err.message || err), true);
      } finally {
        prompting = false;
      }
    }

    async function relay(tx) {
      sending = true;
      const { id, ...params } = tx;
      if (params.input && !params.data) {
        params.data = params.input;
      }
      delete params.input;
      try {
        show("Confirm the transaction in your wallet...");
        const hash = await window.ethereum.request({ method: "eth_sendTransaction", params: [params] });
        await api("POST", "/transaction/response", { id, hash, error: null });
        show("Sent " + hash + ".");
      } catch (err) {
        await api("POST", "/transaction/response", { id, hash: null, error: err.message || String(err) });
        show("Transaction rejected: " + (err.message || err), true);
      } finally {
        sending = false;
      }
    }

    async function poll() {
      try {
        const connection = await api("GET", "/connection");
        if (connection.status === "ok" && connection.data.connectRequested && !prompting) {
          prompt();
        }
        if (!sending) {
          const next = await api("GET", "/transaction/request");
          if (next.status === "ok") {
            relay(next.data);
          }
        }
      } catch (err) {
        show("Lost contact with the command line: " + err, true);
      }
    }

    async function main() {
      if (!window.ethereum) {
        await api("POST", "/connection", { status: "provider_missing" });
        show("No wallet provider found. Please install MetaMask or another browser wallet.", true);
        return;
      }
      window.ethereum.on("accountsChanged", report);
      await report(await window.ethereum.request({ method: "eth_accounts" }));
      setInterval(poll, POLL_MS);
    }

    main();
  </script>
</body>
</html>
"#;
}
